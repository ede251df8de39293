use std::net::SocketAddr;

use rodbus::client::*;
use rodbus::*;

use crate::config::ConnectConfig;
use crate::error::Error;
use crate::transport::RobotTransport;

/// An open Modbus/TCP session with the controller
///
/// Close it with [`Session::close`] once done; dropping it also stops the
/// underlying channel task.
pub struct Session {
    channel: Channel,
    param: RequestParam,
    addr: SocketAddr,
}

struct StateListener {
    tx: tokio::sync::mpsc::Sender<ClientState>,
}

impl StateListener {
    fn create() -> (Self, tokio::sync::mpsc::Receiver<ClientState>) {
        let (tx, rx) = tokio::sync::mpsc::channel(32);
        (Self { tx }, rx)
    }
}

impl Listener<ClientState> for StateListener {
    fn update(&mut self, state: ClientState) -> MaybeAsync<()> {
        let tx = self.tx.clone();
        let future = async move {
            let _ = tx.try_send(state);
        };
        MaybeAsync::asynchronous(future)
    }
}

/// Open a session with the controller described by `config`
///
/// The connection is attempted once. If the channel fails to connect it is
/// disabled and [`Error::Connect`] is returned.
pub async fn connect(config: &ConnectConfig) -> Result<Session, Error> {
    let (listener, mut rx) = StateListener::create();

    let channel = spawn_tcp_client_task(
        HostAddr::ip(config.host.ip(), config.host.port()),
        1,
        default_retry_strategy(),
        config.decode.into(),
        Some(Box::new(listener)),
    );
    channel.enable().await?;

    loop {
        let state = rx.recv().await.ok_or(Error::Shutdown)?;
        tracing::info!("state: {state:?}");
        match state {
            ClientState::Disabled | ClientState::Connecting => {}
            ClientState::Connected => break,
            other => {
                let _ = channel.disable().await;
                return Err(Error::Connect {
                    addr: config.host,
                    reason: format!("{other:?}"),
                });
            }
        }
    }

    tracing::info!("connected to {} (unit {})", config.host, config.unit_id);

    Ok(Session {
        channel,
        param: RequestParam::new(UnitId::new(config.unit_id), config.timeout),
        addr: config.host,
    })
}

impl Session {
    /// Address of the controller
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Disable the channel, closing the TCP connection
    pub async fn close(self) -> Result<(), Error> {
        self.channel.disable().await?;
        tracing::info!("closed session with {}", self.addr);
        Ok(())
    }
}

impl RobotTransport for Session {
    async fn write_multiple_registers(&mut self, start: u16, values: Vec<u16>) -> Result<(), Error> {
        let request = WriteMultiple::from(start, values)?;
        self.channel
            .write_multiple_registers(self.param, request)
            .await?;
        Ok(())
    }

    async fn write_single_coil(&mut self, index: u16, value: bool) -> Result<(), Error> {
        self.channel
            .write_single_coil(self.param, Indexed::new(index, value))
            .await?;
        Ok(())
    }

    async fn write_single_register(&mut self, index: u16, value: u16) -> Result<(), Error> {
        self.channel
            .write_single_register(self.param, Indexed::new(index, value))
            .await?;
        Ok(())
    }

    async fn read_discrete_inputs(&mut self, start: u16, count: u16) -> Result<Vec<bool>, Error> {
        let range = AddressRange::try_from(start, count)?;
        let values = self
            .channel
            .read_discrete_inputs(self.param, range)
            .await?;
        Ok(values.into_iter().map(|x| x.value).collect())
    }
}
