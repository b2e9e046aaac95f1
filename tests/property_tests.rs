use proptest::prelude::*;
use slurp::*;

fn token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.-]{1,16}"
}

prop_compose! {
    fn arb_invite()(
        to_name in token(),
        to_host in token(),
        from_name in token(),
        from_host in token(),
        tag in "[a-z0-9]{0,10}",
        host in token(),
        branch in "z9hG4bK[a-z0-9]{1,10}",
        call_id in token(),
        sequence in any::<u32>(),
        forward in 0u32..=255,
    ) -> Invite {
        let mut invite = Invite::new();
        let headers = invite.headers_mut();
        headers.to = SingleTagHeader::new(to_name, format!("sip:user@{}", to_host)).into();
        headers.from = SingleTagHeader::new(from_name, format!("sip:me@{}", from_host))
            .with_tag(tag)
            .into();
        headers.forward = forward;
        let control = invite.control_mut();
        control.via = vec![Via::new("UDP", host)];
        control.via_branch = branch;
        control.call_id = call_id;
        control.sequence = sequence;
        invite
    }
}

proptest! {
    #[test]
    fn render_is_idempotent(invite in arb_invite()) {
        let first = invite.render().unwrap();
        let second = invite.render().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn zero_forward_renders_default(invite in arb_invite()) {
        let rendered = invite.render().unwrap();
        let expected = match invite.headers().forward {
            0 => 70,
            n => n,
        };
        let expected_line = format!("\r\nMax-Forwards: {}\r\n", expected);
        prop_assert!(rendered.contains(&expected_line));
    }

    #[test]
    fn empty_contacts_fall_back_to_from(invite in arb_invite()) {
        let rendered = invite.render().unwrap();
        let contacts: Vec<&str> = rendered
            .split("\r\n")
            .filter(|line| line.starts_with("Contact: "))
            .collect();
        let from = &invite.headers().from;
        let expected = format!("Contact: {} <{}>", from.value(), from.uri());
        prop_assert_eq!(contacts, vec![expected.as_str()]);
    }

    #[test]
    fn rendered_fields_parse_back(invite in arb_invite()) {
        let rendered = invite.render().unwrap();
        let mut parsed = Invite::new();
        parsed.parse_with(&rendered, &ParserLimits::default(), &NullSink).unwrap();

        prop_assert_eq!(parsed.headers().to.value(), invite.headers().to.value());
        prop_assert_eq!(parsed.headers().from.uri(), invite.headers().from.uri());
        prop_assert_eq!(parsed.headers().from.param("tag"), invite.headers().from.param("tag"));
        prop_assert_eq!(parsed.control().sequence, invite.control().sequence);
        prop_assert_eq!(&parsed.control().call_id, &invite.control().call_id);
        prop_assert_eq!(&parsed.control().via, &invite.control().via);
    }
}
