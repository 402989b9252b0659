//! 送信状態の管理
//!
//! `Idle → Submitting → {成功(遷移), 失敗(Idleに戻りエラー表示)}`
//!
//! 送信中の再送信は無視する（同時に1リクエストまで）。

use crate::error::InvocationError;
use std::cell::RefCell;
use std::future::Future;

/// 送信フェーズ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    /// 失敗（再送信可能）
    Failed(String),
}

impl SubmitPhase {
    /// 送信開始。送信中なら何もせずfalse
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = SubmitPhase::Submitting;
        true
    }

    pub fn succeed(&mut self) {
        *self = SubmitPhase::Idle;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = SubmitPhase::Failed(message.into());
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitPhase::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitPhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// 送信ボタン1つ分の状態
///
/// シングルスレッド（UIイベント/単一タスク）前提
#[derive(Debug, Default)]
pub struct SubmitControl {
    phase: RefCell<SubmitPhase>,
}

impl SubmitControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.phase.borrow().is_busy()
    }

    /// 送信を実行
    ///
    /// 送信中に呼ばれた場合は `call` を実行せずNoneを返す
    pub async fn submit<T, F, Fut>(&self, call: F) -> Option<Result<T, InvocationError>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, InvocationError>>,
    {
        if !self.phase.borrow_mut().begin() {
            return None;
        }

        let mut guard = PhaseGuard {
            phase: &self.phase,
            done: false,
        };
        let outcome = call().await;
        guard.done = true;

        let mut phase = self.phase.borrow_mut();
        match &outcome {
            Ok(_) => phase.succeed(),
            Err(e) => phase.fail(e.to_string()),
        }
        Some(outcome)
    }
}

/// 途中でFutureが破棄された場合にIdleへ戻す
struct PhaseGuard<'a> {
    phase: &'a RefCell<SubmitPhase>,
    done: bool,
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        if !self.done {
            if let Ok(mut phase) = self.phase.try_borrow_mut() {
                phase.succeed();
            }
        }
    }
}
