use lang_showcase::app::demos::{self, DemoContext, DemoKind};
use lang_showcase::WiringStyle;

fn render(kind: DemoKind, ctx: &DemoContext) -> String {
    let mut out = Vec::new();
    demos::run(kind, ctx, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_demos_are_deterministic() {
    let ctx = DemoContext::default();
    for kind in DemoKind::ALL {
        assert_eq!(render(kind, &ctx), render(kind, &ctx), "{} output changed", kind);
    }
}

#[test]
fn test_sealed_demo_uses_two_decimals() {
    let text = render(DemoKind::Sealed, &DemoContext::default());
    assert!(text.contains("Circle with radius 5.00 and area 78.54"));
    assert!(text.contains("Payment successful: transaction TX-12345 for $99.99"));
    assert!(text.contains("Payment failed: [ERR-001] Insufficient funds"));
    assert!(text.contains("Payment pending: reference REF-7 (retry in 30s)"));
}

#[test]
fn test_coffee_demo_per_wiring() {
    for style in WiringStyle::ALL {
        let ctx = DemoContext {
            wiring: style,
            wiring_file: None,
        };
        let text = render(DemoKind::Coffee, &ctx);
        assert!(text.starts_with(&format!("wiring: {} ", style)));
        assert!(text.contains("~ ~ ~ heating ~ ~ ~"));
        assert!(text.contains(" [_]P coffee! [_]P "));
    }
}

#[test]
fn test_run_all_order() {
    let mut out = Vec::new();
    demos::run_all(&DemoContext::default(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let positions: Vec<usize> = DemoKind::ALL
        .iter()
        .map(|kind| text.find(&format!("== {} ==", kind)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(text.starts_with("== records ==\nPoint[x=3, y=4]\n"));
}
