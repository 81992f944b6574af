use std::sync::Arc;

#[derive(Clone)]
pub struct ApiState {
    pub db: Arc<fitlog_db::Database>,
}
