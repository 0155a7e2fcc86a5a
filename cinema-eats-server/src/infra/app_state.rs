use std::sync::Arc;

use crate::mailing_list::MailingList;

#[derive(Clone, Debug)]
pub struct AppState {
    pub mailing_list: Arc<dyn MailingList>,
}

impl AppState {
    pub fn new(mailing_list: Arc<dyn MailingList>) -> Self {
        Self { mailing_list }
    }
}
