use crate::client::{DirectoryClient, SessionOption};
use ldapglue_codes::ResultCode;

/// Stand-in for the opaque native connection.
#[derive(Debug, PartialEq, Eq)]
pub struct FakeHandle(pub u32);

mockall::mock! {
    pub TestDirectoryClient {}
    impl DirectoryClient for TestDirectoryClient {
        type Handle = FakeHandle;
        type Diagnostic = String;

        fn initialize(&self, uri: Option<String>) -> (ResultCode, Option<FakeHandle>);
        fn set_option(&self, handle: &FakeHandle, option: SessionOption, value: i32) -> ResultCode;
        fn start_tls(&self, handle: &FakeHandle) -> ResultCode;
        fn simple_bind(&self, handle: &FakeHandle, dn: &str, password: &str) -> ResultCode;
        fn code_to_string(&self, code: ResultCode) -> Option<String>;
        fn diagnostic_message(&self, handle: &FakeHandle) -> Option<String>;
        fn unbind(&self, handle: FakeHandle);
    }
}

/// Mock whose renderer answers with the kind's standard wording.
pub fn client_with_renderer() -> MockTestDirectoryClient {
    let mut client = MockTestDirectoryClient::new();
    client
        .expect_code_to_string()
        .returning(|code| Some(ldapglue_codes::classify(code).to_string()));
    client
}
