#![allow(dead_code)]

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tripwise_travel::{Sleeper, TravelService, TravelSettings};

/// Records every requested sleep and returns immediately.
#[derive(Clone, Default)]
pub struct RecordingSleeper {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn recorded(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        self.sleeps.lock().unwrap().push(duration);
        std::future::ready(())
    }
}

pub fn live_settings(base_url: &str) -> TravelSettings {
    TravelSettings {
        api_key: Some("test-key".to_string()),
        api_host: "travel-advisor.p.rapidapi.com".to_string(),
        base_url: base_url.to_string(),
        request_timeout_secs: 8,
    }
}

pub fn live_service(base_url: &str) -> (TravelService<RecordingSleeper>, RecordingSleeper) {
    let sleeper = RecordingSleeper::default();
    let service = TravelService::with_sleeper(&live_settings(base_url), sleeper.clone())
        .expect("service construction should not fail");
    (service, sleeper)
}
