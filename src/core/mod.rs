//! 애플리케이션 코어: 에러 분류, 시계, 상태 조립

pub mod clock;
pub mod errors;
pub mod state;

pub use clock::{Clock, SystemClock};
pub use errors::*;
pub use state::AppState;
