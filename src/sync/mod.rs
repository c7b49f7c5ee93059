pub mod pacer;
pub mod timing;

pub use pacer::{Pacer, SleepPacer};
pub use timing::TimingModel;
