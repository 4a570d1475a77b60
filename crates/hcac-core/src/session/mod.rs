//! # Session Module
//!
//! 入力受付側（CLI・GUI・MCP）が共有する送信処理と履歴。
//!
//! - 入力検証（商品名・説明とも必須）
//! - 待ち時間（キャンセル可能）
//! - 分類と履歴への追加
//!
//! 送信は `&mut self` を取るので、同一セッションで同時に処理中になるのは1件だけ。
//! 複数タスクで共有する場合は [`SharedSession`] を使う。

mod pacing;

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{HcacError, Result};
use crate::history::{CategorizationRecord, History};

pub use pacing::{PaceOutcome, Pacing, PacingTimer, DEFAULT_DELAY_MS};

/// 分類セッション
#[derive(Debug, Default)]
pub struct Session {
    pacing: Pacing,
    history: History,
}

impl Session {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            history: History::new(),
        }
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// 最新の分類結果
    pub fn latest(&self) -> Option<&CategorizationRecord> {
        self.history.latest()
    }

    /// 送信を開始する。入力を検証し、待ち時間のタイマーを始める
    pub fn begin(&self, name: &str, description: &str) -> Result<PendingSubmission> {
        validate(name, description)?;
        debug!(
            delay_ms = self.pacing.delay().as_millis() as u64,
            "pacing submission"
        );
        Ok(PendingSubmission {
            name: name.to_string(),
            description: description.to_string(),
            timer: self.pacing.start(),
        })
    }

    /// 待機中の送信を分類して履歴に追加する
    pub fn complete(&mut self, pending: PendingSubmission) -> &CategorizationRecord {
        let record = CategorizationRecord::categorize(pending.name, pending.description);
        info!(
            name = record.name(),
            category = %record.category(),
            "categorized product"
        );
        self.history.push(record)
    }

    /// 送信（キャンセルなし）
    pub async fn submit(&mut self, name: &str, description: &str) -> Result<&CategorizationRecord> {
        self.submit_with_cancel(name, description, std::future::pending())
            .await
    }

    /// 送信
    ///
    /// 待ち時間中に `cancel` が完了すると `SubmissionCancelled` を返し、履歴は変わらない。
    pub async fn submit_with_cancel<F>(
        &mut self,
        name: &str,
        description: &str,
        cancel: F,
    ) -> Result<&CategorizationRecord>
    where
        F: Future<Output = ()>,
    {
        let pending = self.begin(name, description)?;
        if pending.timer().wait_or_cancel(cancel).await == PaceOutcome::Cancelled {
            return Err(HcacError::SubmissionCancelled);
        }
        Ok(self.complete(pending))
    }
}

/// 待ち時間中の送信。破棄するとキャンセル扱いになる
#[derive(Debug)]
pub struct PendingSubmission {
    name: String,
    description: String,
    timer: PacingTimer,
}

impl PendingSubmission {
    pub fn timer(&self) -> &PacingTimer {
        &self.timer
    }

    /// 待ち時間が終わったか
    pub fn is_ready(&self) -> bool {
        self.timer.is_elapsed()
    }
}

/// 入力検証。空白のみの値も未入力とみなす
pub fn validate(name: &str, description: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(HcacError::MissingField { field: "name" });
    }
    if description.trim().is_empty() {
        return Err(HcacError::MissingField {
            field: "description",
        });
    }
    Ok(())
}

/// タスク間で共有するセッション
///
/// 処理中の送信がある間の再送信は `SubmissionInFlight` で拒否する。
/// 待ち時間中はセッションをロックしないので、履歴の参照は待たされない。
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<tokio::sync::Mutex<Session>>,
    in_flight: Arc<tokio::sync::Mutex<()>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(tokio::sync::Mutex::new(session)),
            in_flight: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    pub async fn submit(&self, name: &str, description: &str) -> Result<CategorizationRecord> {
        let _in_flight = self
            .in_flight
            .try_lock()
            .map_err(|_| HcacError::SubmissionInFlight)?;

        let pending = self.inner.lock().await.begin(name, description)?;
        pending.timer().wait().await;

        let mut session = self.inner.lock().await;
        Ok(session.complete(pending).clone())
    }

    /// 履歴のスナップショット（古い順）
    pub async fn history(&self) -> Vec<CategorizationRecord> {
        self.inner.lock().await.history().records().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::category::Category;

    #[tokio::test(start_paused = true)]
    async fn test_history_accumulates_in_order() {
        let mut session = Session::new(Pacing::from_millis(1000));
        let inputs = [
            ("Wireless Laptop", "A smart digital device", Category::Electronics),
            ("Carpet", "woven rug", Category::Automotive),
            ("Yoga mat", "for the gym", Category::SportsAndOutdoors),
        ];

        for (name, description, _) in inputs {
            session.submit(name, description).await.unwrap();
        }

        assert_eq!(session.history().len(), inputs.len());
        for (record, (name, description, category)) in session.history().iter().zip(inputs) {
            assert_eq!(record.name(), name);
            assert_eq!(record.description(), description);
            assert_eq!(record.category(), category);
        }
        assert_eq!(session.latest().unwrap().name(), "Yoga mat");
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_for_pacing() {
        let mut session = Session::new(Pacing::from_millis(1000));
        let started = tokio::time::Instant::now();
        session.submit("Novel", "mystery").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_submission_is_not_recorded() {
        let mut session = Session::new(Pacing::from_millis(1000));
        let cancel = tokio::time::sleep(Duration::from_millis(10));

        let err = session
            .submit_with_cancel("Phone", "smart device", cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, HcacError::SubmissionCancelled));
        assert!(session.history().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_begin_and_complete() {
        let mut session = Session::new(Pacing::from_millis(500));
        let pending = session.begin("Vitamin D", "daily health supplement").unwrap();
        assert!(!pending.is_ready());
        assert!(session.history().is_empty());

        tokio::time::advance(Duration::from_millis(500)).await;
        assert!(pending.is_ready());

        let record = session.complete(pending);
        assert_eq!(record.category(), Category::HealthAndWellness);
        assert_eq!(session.history().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_pending_submission_is_not_recorded() {
        let mut session = Session::new(Pacing::from_millis(500));

        let abandoned = session.begin("Lamp", "bedside decor").unwrap();
        drop(abandoned);

        let pending = session.begin("Dumbbells", "home gym exercise").unwrap();
        tokio::time::advance(Duration::from_millis(500)).await;
        session.complete(pending);

        assert_eq!(session.history().len(), 1);
        let record = session.latest().unwrap();
        assert_eq!(record.name(), "Dumbbells");
        assert_eq!(record.category(), Category::SportsAndOutdoors);
    }

    #[tokio::test]
    async fn test_missing_fields_rejected() {
        let mut session = Session::new(Pacing::none());

        let err = session.submit("", "desc").await.unwrap_err();
        assert!(matches!(err, HcacError::MissingField { field: "name" }));

        let err = session.submit("Name", "   ").await.unwrap_err();
        assert!(matches!(
            err,
            HcacError::MissingField {
                field: "description"
            }
        ));

        assert!(session.history().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shared_session_rejects_concurrent_submission() {
        let shared = SharedSession::new(Session::new(Pacing::from_millis(1000)));

        let first = {
            let shared = shared.clone();
            tokio::spawn(async move { shared.submit("Truck", "diesel engine").await })
        };
        // 最初の送信が待機に入るまで進める
        tokio::task::yield_now().await;

        let err = shared.submit("Toy", "for kids").await.unwrap_err();
        assert!(matches!(err, HcacError::SubmissionInFlight));

        let record = first.await.unwrap().unwrap();
        assert_eq!(record.category(), Category::Automotive);
        assert_eq!(shared.history().await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shared_history_not_blocked_by_pacing() {
        let shared = SharedSession::new(Session::new(Pacing::from_millis(1000)));

        let first = {
            let shared = shared.clone();
            tokio::spawn(async move { shared.submit("Truck", "diesel engine").await })
        };
        tokio::task::yield_now().await;

        let started = tokio::time::Instant::now();
        let history = shared.history().await;
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert!(history.is_empty());

        first.await.unwrap().unwrap();
        let history = shared.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].category(), Category::Automotive);
    }
}
