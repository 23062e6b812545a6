use std::io::Write;
use std::sync::{Arc, Mutex};

use anteplay_engine::game::Session;
use anteplay_engine::rules::Decision;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn session_emits_deal_decision_and_settlement_events() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut session = Session::new(100, Some(21));
        session.place_ante(10).unwrap();
        session.decide(Decision::Play).unwrap();
    });

    let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("player dealt"), "logs: {}", logs);
    assert!(logs.contains("decision received"), "logs: {}", logs);
    assert!(logs.contains("decision=Play"), "logs: {}", logs);
    assert!(logs.contains("round resolved"), "logs: {}", logs);
}
