use super::*;
use psw_core::CoreId;

use crate::test_support::fresh_state;

#[test]
fn request_stop_is_public_and_only_touches_assigned_cores() {
    let state = fresh_state();
    request_stop(&state);

    assert_eq!(state.core(CoreId::new(2).unwrap()).status(), CoreStatus::StopRequested);
    assert_eq!(state.core(CoreId::new(0).unwrap()).status(), CoreStatus::Unused);
}

#[tokio::test]
async fn await_drain_returns_true_once_cores_report_stopped() {
    let state = fresh_state();
    request_stop(&state);
    state.core(CoreId::new(2).unwrap()).set_status(CoreStatus::Stopped);
    state.core(CoreId::new(3).unwrap()).set_status(CoreStatus::Stopped);
    state.core(CoreId::new(4).unwrap()).set_status(CoreStatus::Stopped);
    state.core(CoreId::new(5).unwrap()).set_status(CoreStatus::Stopped);

    assert!(await_drain(&state).await);
}

#[tokio::test]
async fn await_drain_times_out_if_a_core_never_stops() {
    std::env::set_var("PSWD_SHUTDOWN_TIMEOUT_MS", "20");
    std::env::set_var("PSWD_FLUSH_RETRY_INTERVAL_US", "2000");
    let state = fresh_state();
    request_stop(&state);

    assert!(!await_drain(&state).await);

    std::env::remove_var("PSWD_SHUTDOWN_TIMEOUT_MS");
    std::env::remove_var("PSWD_FLUSH_RETRY_INTERVAL_US");
}
