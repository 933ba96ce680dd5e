//! 时间来源
//!
//! 可见性过滤和 expiry 校验都依赖“当前时刻”，统一通过 [`Clock`] 获取，
//! 测试中可以用手动时钟模拟时间流逝。

use chrono::{DateTime, Utc};

/// 当前时刻的来源
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// 系统墙钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub use manual::ManualClock;

#[cfg(test)]
mod manual {
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::{DateTime, Duration, Utc};

    use super::Clock;

    /// 手动推进的时钟，clone 之间共享同一个时刻
    #[derive(Debug, Clone)]
    pub struct ManualClock(Rc<Cell<DateTime<Utc>>>);

    impl ManualClock {
        pub fn new(start: DateTime<Utc>) -> Self {
            Self(Rc::new(Cell::new(start)))
        }

        pub fn advance(&self, by: Duration) {
            self.0.set(self.0.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            self.0.get()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let start = Utc::now();
        let clock = ManualClock::new(start);
        let handle = clock.clone();
        handle.advance(Duration::minutes(2));
        assert_eq!(clock.now(), start + Duration::minutes(2));
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let before = Utc::now();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}
