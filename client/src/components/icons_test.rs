use super::*;

#[test]
fn form_field_names_map_to_icons() {
    assert_eq!(icon_for_field("fullName"), Some(IconKind::User));
    assert_eq!(icon_for_field("phoneNumber"), Some(IconKind::Phone));
    assert_eq!(icon_for_field("serviceType"), Some(IconKind::Truck));
    assert_eq!(icon_for_field("email"), Some(IconKind::Mail));
    assert_eq!(icon_for_field("message"), Some(IconKind::Message));
    assert_eq!(icon_for_field("trackingNumber"), Some(IconKind::MapPin));
}

#[test]
fn unknown_field_has_no_icon() {
    assert_eq!(icon_for_field("company"), None);
    assert_eq!(icon_for_field(""), None);
}

#[test]
fn every_icon_has_path_data() {
    let all = [
        IconKind::User,
        IconKind::Phone,
        IconKind::Truck,
        IconKind::Mail,
        IconKind::Message,
        IconKind::MapPin,
        IconKind::ArrowUpRight,
        IconKind::ExternalLink,
        IconKind::ChevronDown,
        IconKind::Check,
    ];
    for kind in all {
        assert!(kind.paths().iter().all(|d| !d.is_empty()), "{kind:?}");
    }
}
