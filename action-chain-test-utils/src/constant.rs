pub static TEST_SITE_TITLE: &str = "Action Chain";
pub static TEST_LOGIN_PATH: &str = "/account/login";
pub static TEST_REQUEST_ID_HEADER: &str = "x-request-id";
pub static TEST_LOG_FILTER: &str = "warn";
