use std::future::Future;

use crate::error::Error;

/// Modbus requests issued by [`Robot`](crate::Robot)
///
/// Each call is a single request that completes once the device has answered.
/// [`Session`](crate::client::Session) implements this over a TCP channel.
pub trait RobotTransport {
    /// Write a block of holding registers starting at `start`
    fn write_multiple_registers(
        &mut self,
        start: u16,
        values: Vec<u16>,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    /// Write a single coil
    fn write_single_coil(
        &mut self,
        index: u16,
        value: bool,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    /// Write a single holding register
    fn write_single_register(
        &mut self,
        index: u16,
        value: u16,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    /// Read `count` discrete inputs starting at `start`, in address order
    fn read_discrete_inputs(
        &mut self,
        start: u16,
        count: u16,
    ) -> impl Future<Output = Result<Vec<bool>, Error>> + Send;
}
