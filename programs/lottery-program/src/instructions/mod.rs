pub mod create_lottery;
pub mod decide_winner;
pub mod enter_lottery;
pub mod reopen_lottery;

pub use create_lottery::*;
pub use decide_winner::*;
pub use enter_lottery::*;
pub use reopen_lottery::*;
