use super::{ALT_TRANSPORT_COMMAND, SSH_PROGRAM, TerminalKind, ssh_command, ssh_invocation};
use crate::menu::HostItem;

#[test]
fn ssh_command_switches_to_wrapper() {
    let mut host = HostItem::new("Example", "LANG=\"C\" example.com");
    assert_eq!(ssh_command(&host), SSH_PROGRAM);
    assert_eq!(ssh_invocation(&host), "ssh example.com");

    host.enable_alt_transport = true;
    assert_eq!(ssh_command(&host), ALT_TRANSPORT_COMMAND);
    assert_eq!(ssh_invocation(&host), "bcvi --wrap-ssh -- example.com");
}

#[test]
fn terminal_kinds_resolve_by_name() {
    for name in TerminalKind::NAMES {
        let kind = TerminalKind::from_name(name).expect("known terminal");
        assert_eq!(kind.build().name(), name);
    }
    assert_eq!(TerminalKind::from_name("konsole"), None);
    assert!(!TerminalKind::Xterm.build().supports_tabs());
    assert!(TerminalKind::GnomeTerminal.build().supports_tabs());
}
