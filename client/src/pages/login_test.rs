use super::*;

#[test]
fn log_line_names_email_only() {
    let submission = LoginSubmission { email: "a@b.com".to_owned(), password: "hunter2".to_owned() };
    let line = submission_log_line(&submission);
    assert_eq!(line, "login submitted for a@b.com");
    assert!(!line.contains("hunter2"));
}
