use super::split_env;

#[test]
fn returns_empty_prefix_without_assignments() {
    let split = split_env("host.pl");
    assert_eq!(split.env, "");
    assert_eq!(split.rest, "host.pl");
}

#[test]
fn extracts_single_assignment_with_trailing_space() {
    let split = split_env(r#"LANG="pl_PL.utf8" host.pl"#);
    assert_eq!(split.env, r#"LANG="pl_PL.utf8" "#);
    assert_eq!(split.rest, "host.pl");
}

#[test]
fn captures_all_consecutive_assignments() {
    let split = split_env(r#"LANG="pl_PL.utf8" TERM="xterm-color" kate@example.pl"#);
    assert_eq!(split.env, r#"LANG="pl_PL.utf8" TERM="xterm-color" "#);
    assert_eq!(split.rest, "kate@example.pl");
}

#[test]
fn keeps_repeated_separating_spaces_in_prefix() {
    let split = split_env(r#"LC_ALL="en_GB.utf8"   webserver tail -f error.log"#);
    assert_eq!(split.env, r#"LC_ALL="en_GB.utf8"   "#);
    assert_eq!(split.rest, "webserver tail -f error.log");
}

#[test]
fn accepts_escaped_quotes_inside_values() {
    let split = split_env(r#"GREETING="say \"hi\"" host"#);
    assert_eq!(split.env, r#"GREETING="say \"hi\"" "#);
    assert_eq!(split.rest, "host");
}

#[test]
fn assignment_without_following_space_is_not_a_prefix() {
    let split = split_env(r#"LANG="C""#);
    assert_eq!(split.env, "");
    assert_eq!(split.rest, r#"LANG="C""#);
}

#[test]
fn assignments_after_the_host_are_left_in_place() {
    let split = split_env(r#"-Ax bob@example.com FOO="bar" "#);
    assert_eq!(split.env, "");
    assert_eq!(split.rest, r#"-Ax bob@example.com FOO="bar" "#);
}
