pub mod extract;
pub mod gateway;
pub mod prompts;
pub mod report_service;
pub mod storage;
pub mod test_service;
