use super::Xterm;
use crate::command::TerminalCommand;
use crate::menu::{HostItem, Item, MenuItem};

fn example() -> HostItem {
    let mut host = HostItem::new("Example", "-Ax bob@example.com");
    host.geometry = Some(String::new());
    host
}

#[test]
fn builds_plain_window_command() {
    assert_eq!(Xterm.build_window_command(&example()), r#"xterm -T "Example" -e sh -c "ssh -Ax bob@example.com" &"#);
}

#[test]
fn env_prefix_leads_the_command() {
    let mut host = example();
    host.sshparams = r#"LANG="pl_PL.utf8" kate@example.pl"#.to_string();
    assert_eq!(
        Xterm.build_window_command(&host),
        r#"LANG="pl_PL.utf8" xterm -T "Example" -e sh -c "ssh kate@example.pl" &"#
    );

    host.sshparams = r#"LANG="pl_PL.utf8" TERM="xterm-color" kate@example.pl"#.to_string();
    assert_eq!(
        Xterm.build_window_command(&host),
        r#"LANG="pl_PL.utf8" TERM="xterm-color" xterm -T "Example" -e sh -c "ssh kate@example.pl" &"#
    );
}

#[test]
fn quoted_title_and_alt_transport() {
    let mut host = HostItem::new(r#"The "Live" Server"#, "www.example.com");
    host.enable_alt_transport = true;
    assert_eq!(
        Xterm.build_window_command(&host),
        r#"xterm -T "The \"Live\" Server" -e sh -c "bcvi --wrap-ssh -- www.example.com" &"#
    );
}

#[test]
fn geometry_is_passed_verbatim() {
    let mut host = HostItem::new("Web Server", "www.example.com");
    host.geometry = Some("80x24+0+0".to_string());
    assert_eq!(
        Xterm.build_window_command(&host),
        r#"xterm -T "Web Server" -geometry 80x24+0+0 -e sh -c "ssh www.example.com" &"#
    );

    host.geometry = Some("120x30+0-0 -bg white -fg black".to_string());
    assert_eq!(
        Xterm.build_window_command(&host),
        r#"xterm -T "Web Server" -geometry 120x30+0-0 -bg white -fg black -e sh -c "ssh www.example.com" &"#
    );
}

#[test]
fn shell_metacharacters_are_escaped_once() {
    let host = HostItem::new("Host A", "hosta | tee -a $HOME/hosta.log");
    assert_eq!(
        Xterm.build_window_command(&host),
        r#"xterm -T "Host A" -e sh -c "ssh hosta | tee -a \$HOME/hosta.log" &"#
    );
}

#[test]
fn tabs_are_not_supported() {
    let mut menu = MenuItem::new("Servers");
    menu.append_item(Item::Host(example()));
    assert_eq!(Xterm.build_tabbed_command(&menu.items), None);
}

#[test]
fn window_command_launches_the_named_program() {
    let command = Xterm.build_window_command(&example());
    assert_eq!(Xterm.name(), "xterm");
    assert!(command.starts_with(&format!("{} -T ", Xterm.name())));
}
