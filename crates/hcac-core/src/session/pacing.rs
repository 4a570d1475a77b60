//! Submission pacing
//!
//! 結果表示前に入れる人工的な待ち時間。分類処理そのものとは独立している。

use std::future::Future;
use std::time::Duration;

use tokio::time::{self, Instant};
use tracing::debug;

/// デフォルトの待ち時間（ミリ秒）
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// 待ち時間のポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    delay: Duration,
}

impl Pacing {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// 待ち時間なし
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// タイマーを開始
    pub fn start(&self) -> PacingTimer {
        PacingTimer {
            deadline: Instant::now() + self.delay,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from_millis(DEFAULT_DELAY_MS)
    }
}

/// 待ちの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceOutcome {
    Elapsed,
    Cancelled,
}

/// 開始済みのタイマー
#[derive(Debug)]
pub struct PacingTimer {
    deadline: Instant,
}

impl PacingTimer {
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn is_elapsed(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// 期限まで待つ。先に `cancel` が完了した場合は `Cancelled`
    pub async fn wait_or_cancel<F>(&self, cancel: F) -> PaceOutcome
    where
        F: Future<Output = ()>,
    {
        if self.is_elapsed() {
            return PaceOutcome::Elapsed;
        }

        tokio::select! {
            biased;
            _ = cancel => {
                debug!(remaining_ms = self.remaining().as_millis() as u64, "pacing cancelled");
                PaceOutcome::Cancelled
            }
            _ = time::sleep_until(self.deadline) => PaceOutcome::Elapsed,
        }
    }

    /// キャンセルなしで期限まで待つ
    pub async fn wait(&self) {
        time::sleep_until(self.deadline).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        assert_eq!(Pacing::default().delay(), Duration::from_millis(1000));
        assert_eq!(Pacing::none().delay(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_elapses() {
        let timer = Pacing::from_millis(500).start();
        assert!(!timer.is_elapsed());
        assert_eq!(timer.remaining(), Duration::from_millis(500));

        let outcome = timer.wait_or_cancel(std::future::pending()).await;
        assert_eq!(outcome, PaceOutcome::Elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_cancelled_before_deadline() {
        let timer = Pacing::from_millis(1000).start();
        let cancel = time::sleep(Duration::from_millis(100));

        let started = Instant::now();
        let outcome = timer.wait_or_cancel(cancel).await;
        assert_eq!(outcome, PaceOutcome::Cancelled);
        assert!(started.elapsed() < Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_never_cancels() {
        let timer = Pacing::none().start();
        assert!(timer.is_elapsed());
        let outcome = timer.wait_or_cancel(std::future::ready(())).await;
        assert_eq!(outcome, PaceOutcome::Elapsed);
    }
}
