/// Holding registers receiving the packed project file name
pub const PROJECT_NAME: u16 = 7701;
/// Coil that toggles play/pause of the current project
pub const PLAY_PAUSE: u16 = 7104;
/// Holding register carrying the project speed as a percentage
pub const PROJECT_SPEED: u16 = 7101;
/// Discrete input set while the controller reports an error
pub const ERROR_PRESENT: u16 = 7201;
/// Discrete input set while a project is running
pub const PROJECT_RUNNING: u16 = 7202;

/// Words written after the packed project name to terminate it
pub const PROJECT_NAME_SUFFIX: [u16; 2] = [0, 23600];

/// Maximum number of registers in a single write multiple registers request
pub const MAX_WRITE_REGISTERS: usize = 0x7B;

/// Longest project name whose payload fits in a single request
pub const MAX_PROJECT_NAME_LEN: usize = 2 * (MAX_WRITE_REGISTERS - PROJECT_NAME_SUFFIX.len());

/// Highest speed percentage accepted by the controller
pub const MAX_SPEED: u16 = 100;
