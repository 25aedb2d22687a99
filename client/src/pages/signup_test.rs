use super::*;

#[test]
fn log_line_names_user_without_password() {
    let submission = SignupSubmission {
        username: "kai".to_owned(),
        email: "k@x.io".to_owned(),
        password: "s3cret".to_owned(),
    };
    let line = submission_log_line(&submission);
    assert_eq!(line, "signup submitted for kai <k@x.io>");
    assert!(!line.contains("s3cret"));
}
