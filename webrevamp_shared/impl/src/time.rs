use chrono::{DateTime, Utc};
use webrevamp_di::Build;
use webrevamp_shared_contracts::time::TimeService;
use webrevamp_utils::trace_instrument;

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[trace_instrument(skip(self))]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
