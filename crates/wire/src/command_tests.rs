use super::*;

#[test]
fn parses_component_start() {
    let cmd = parse_line("component start name=fwd1 core=2 type=forward").unwrap();
    assert_eq!(
        cmd,
        Command::Worker {
            action: WorkerAction::Start,
            name: ComponentName::new("fwd1").unwrap(),
            lcore_id: CoreId::new(2).unwrap(),
            kind: WorkerKind::Forward,
        }
    );
}

#[test]
fn parses_component_stop_without_core_or_type() {
    let cmd = parse_line("component stop name=does_not_exist").unwrap();
    assert!(matches!(
        cmd,
        Command::Worker { action: WorkerAction::Stop, .. }
    ));
}

#[test]
fn parses_port_add() {
    let cmd = parse_line("port add port=ring:0 dir=rx name=fwd1").unwrap();
    assert_eq!(
        cmd,
        Command::Port {
            action: PortAction::Add,
            port_ref: PortRef::new(PortKind::Ring, 0),
            direction: PortDirection::Rx,
            component_name: ComponentName::new("fwd1").unwrap(),
            ability: None,
        }
    );
}

#[test]
fn parses_classifier_table_add_by_mac() {
    let cmd = parse_line("classifier_table add type=mac mac=aa:bb:cc:dd:ee:ff port=vhost:2").unwrap();
    match cmd {
        Command::ClsTable { action, kind, vid, mac, target, is_default } => {
            assert_eq!(action, ClsAction::Add);
            assert_eq!(kind, ClsKind::Mac);
            assert_eq!(vid, ETH_VLAN_ID_MAX);
            assert_eq!(mac, MacAddr::parse("aa:bb:cc:dd:ee:ff").unwrap());
            assert_eq!(target, PortRef::new(PortKind::Vhost, 2));
            assert!(!is_default);
        }
        _ => panic!("expected ClsTable"),
    }
}

#[test]
fn classifier_table_requires_mac_when_kind_is_mac() {
    let err = parse_line("classifier_table add type=mac port=phy:0").unwrap_err();
    assert_eq!(err, ParseError::MissingField("mac"));
}

#[test]
fn classifier_table_accepts_default_target() {
    let cmd = parse_line(
        "classifier_table add type=mac mac=aa:bb:cc:dd:ee:ff port=vhost:2 default=true",
    )
    .unwrap();
    match cmd {
        Command::ClsTable { target, is_default, .. } => {
            assert_eq!(target, PortRef::new(PortKind::Vhost, 2));
            assert!(is_default);
        }
        _ => panic!("expected ClsTable"),
    }
}

#[yare::parameterized(
    vid_out_of_range = {
        "classifier_table add type=vlan vid=4095 port=phy:0",
        "vid"
    },
    malformed_mac = {
        "classifier_table add type=mac mac=not-a-mac port=phy:0",
        "mac"
    },
    pcp_out_of_range = {
        "port add port=phy:0 dir=rx name=fwd1 ability=add_vlan_tag pcp=8",
        "pcp"
    },
    unknown_iface_kind = {
        "port add port=satellite:0 dir=rx name=fwd1",
        "port"
    },
    non_numeric_port_index = {
        "port add port=phy:x dir=rx name=fwd1",
        "port"
    },
)]
fn rejects_malformed_field(line: &str, expected_field: &str) {
    let err = parse_line(line).unwrap_err();
    assert!(matches!(err, ParseError::MalformedField { field, .. } if field == expected_field));
}

#[test]
fn parses_status_and_exit() {
    assert_eq!(parse_line("status").unwrap(), Command::Status);
    assert_eq!(parse_line("exit").unwrap(), Command::Exit);
}

#[test]
fn rejects_empty_line() {
    assert_eq!(parse_line("").unwrap_err(), ParseError::Empty);
}

#[test]
fn rejects_unknown_verb() {
    assert_eq!(
        parse_line("frobnicate foo=bar").unwrap_err(),
        ParseError::UnknownVerb("frobnicate".to_string())
    );
}
