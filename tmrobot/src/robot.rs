use crate::error::Error;
use crate::registers;
use crate::transport::RobotTransport;
use crate::types::{ProjectName, RobotStatus, Speed};

/// Commands and status reads understood by the controller
///
/// Every operation issues exactly one request per register block and waits for the
/// answer before returning. An acknowledged write only means the controller
/// accepted the value; whether the action completed is not checked.
pub struct Robot<T> {
    transport: T,
}

impl<T> Robot<T>
where
    T: RobotTransport,
{
    /// Wrap a transport, usually a [`Session`](crate::client::Session)
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Give back the transport, e.g. to close it
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Make `name` the current project
    pub async fn change_project(&mut self, name: &ProjectName) -> Result<(), Error> {
        tracing::info!("changing project to '{name}'");
        self.transport
            .write_multiple_registers(registers::PROJECT_NAME, name.to_registers())
            .await
    }

    /// Play the current project if stopped or paused, pause it otherwise
    pub async fn toggle_play_pause(&mut self) -> Result<(), Error> {
        tracing::info!("toggling play/pause");
        self.transport
            .write_single_coil(registers::PLAY_PAUSE, true)
            .await
    }

    /// Set the project speed
    pub async fn set_speed(&mut self, speed: Speed) -> Result<(), Error> {
        tracing::info!("setting speed to {speed}");
        self.transport
            .write_single_register(registers::PROJECT_SPEED, speed.get())
            .await
    }

    /// Check whether the controller reports an error
    pub async fn is_error_present(&mut self) -> Result<bool, Error> {
        self.read_flag(registers::ERROR_PRESENT).await
    }

    /// Check whether a project is running
    pub async fn is_project_running(&mut self) -> Result<bool, Error> {
        self.read_flag(registers::PROJECT_RUNNING).await
    }

    /// Read both status flags, error flag first
    pub async fn status(&mut self) -> Result<RobotStatus, Error> {
        Ok(RobotStatus {
            error_present: self.is_error_present().await?,
            project_running: self.is_project_running().await?,
        })
    }

    /// Change project, toggle play/pause, set the speed and read back the status
    ///
    /// Stops at the first request that fails.
    pub async fn run_tutorial(
        &mut self,
        project: &ProjectName,
        speed: Speed,
    ) -> Result<RobotStatus, Error> {
        self.change_project(project).await?;
        self.toggle_play_pause().await?;
        self.set_speed(speed).await?;
        self.status().await
    }

    async fn read_flag(&mut self, address: u16) -> Result<bool, Error> {
        let bits = self.transport.read_discrete_inputs(address, 1).await?;
        let value = bits.first().copied().ok_or(Error::EmptyResponse(address))?;
        tracing::info!("discrete input {address}: {value}");
        Ok(value)
    }
}
