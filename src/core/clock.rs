//! 현재 시각 공급자
//!
//! 토큰 발급, 만료 판정, 재설정 토큰 소비는 모두 주입된 [`Clock`]에서 시각을 얻습니다.

use chrono::{DateTime, Utc};
use mongodb::bson;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// 저장 계층에서 쓰는 BSON 시각 (밀리초 정밀도)
    fn now_bson(&self) -> bson::DateTime {
        to_bson(self.now())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub fn to_bson(at: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(at.timestamp_millis())
}

#[cfg(test)]
pub use manual::ManualClock;
