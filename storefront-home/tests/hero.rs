//! Hero banner composition

use std::cell::RefCell;
use std::time::Duration;

use iced::{Element, Size, widget::Space};
use storefront_home::Message;
use storefront_home::domains::ui::links::{
    LinkRenderer, LinkStyle, LocalizedLinks, localize,
};
use storefront_home::domains::ui::views::hero::{
    HERO, HeroFrame, HeroLayer, hero_banner, layer_plan,
};
use storefront_model::CountryCode;

#[derive(Default)]
struct RecordingLinks {
    calls: RefCell<Vec<(String, String, LinkStyle)>>,
}

impl LinkRenderer for RecordingLinks {
    fn link<'a>(
        &self,
        destination: &str,
        label: &'a str,
        style: LinkStyle,
    ) -> Element<'a, Message> {
        self.calls
            .borrow_mut()
            .push((destination.to_string(), label.to_string(), style));
        Space::new().into()
    }
}

fn render(elapsed_ms: u64, window: Size) -> Vec<(String, String, LinkStyle)> {
    let links = RecordingLinks::default();
    let frame = HeroFrame::at(&HERO, Duration::from_millis(elapsed_ms));
    let _ = hero_banner(&HERO, &frame, &links, window);
    links.calls.into_inner()
}

#[test]
fn banner_renders_both_calls_to_action() {
    let calls = render(0, Size::new(1280.0, 800.0));
    assert_eq!(
        calls,
        vec![
            ("/store".to_string(), "Ver Produtos".to_string(), LinkStyle::Primary),
            (
                "/collections".to_string(),
                "Ver Coleções".to_string(),
                LinkStyle::Secondary
            ),
        ]
    );
}

#[test]
fn banner_structure_does_not_depend_on_time_or_width() {
    let reference = render(0, Size::new(1280.0, 800.0));
    for (elapsed, width) in [(1_500, 1280.0), (6_900, 600.0), (123_456, 1920.0)] {
        assert_eq!(render(elapsed, Size::new(width, 800.0)), reference);
    }
}

#[test]
fn banner_stacks_one_layer_per_blob_plus_three() {
    let plan = layer_plan(&HERO);
    assert_eq!(plan.len(), HERO.blobs.len() + 3);
    assert_eq!(plan.first(), Some(&HeroLayer::Gradient));
    assert_eq!(plan.last(), Some(&HeroLayer::ScrollIndicator));
    let blobs = plan
        .iter()
        .filter(|layer| matches!(layer, HeroLayer::Blob(_)))
        .count();
    assert_eq!(blobs, HERO.blobs.len());

    // Frames only move blobs; they never add or drop any.
    for elapsed in [0, 2_500, 9_999] {
        let frame = HeroFrame::at(&HERO, Duration::from_millis(elapsed));
        assert_eq!(frame.blobs.len(), blobs);
    }
}

#[test]
fn copy_is_fixed() {
    assert_eq!(HERO.heading, "Bem-vindo à JF Imperadores");
    assert_eq!(
        HERO.subheading,
        "Descubra produtos incríveis com os melhores preços e ofertas exclusivas"
    );
}

#[test]
fn localized_links_prefix_the_country() {
    let br = CountryCode::parse("br").expect("country");
    let links = LocalizedLinks::new(br.clone());
    assert_eq!(links.href("/store"), "/br/store");
    assert_eq!(localize(&br, "/collections/ofertas"), "/br/collections/ofertas");
    assert_eq!(localize(&br, "https://example.com/x"), "https://example.com/x");
}
