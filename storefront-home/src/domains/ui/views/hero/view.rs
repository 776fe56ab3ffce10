//! View builder for the hero banner

use iced::{
    Alignment, Color, Element, Length, Padding, Point, Size,
    alignment::{Horizontal, Vertical},
    widget::{Space, column, container, pin, row, stack, text},
};
use lucide_icons::Icon;

use crate::domains::ui::links::{LinkRenderer, lucide_font};
use crate::domains::ui::theme::{self, StorefrontTheme};
use crate::infra::constants::{
    breakpoints,
    hero::{layout, typography},
};
use crate::messages::Message;

use super::content::{BlobSpec, BlobTint, HeroContent};
use super::motion::{BlobFrame, HeroFrame, blob_bounds};

/// Banner height for a window: 75% of its height, never shorter than the
/// minimum that fits the copy.
pub fn banner_height(window: Size) -> f32 {
    (window.height * layout::HEIGHT_FRACTION).max(layout::MIN_HEIGHT)
}

/// One layer of the banner stack, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroLayer {
    Gradient,
    /// Index into [`HeroContent::blobs`].
    Blob(usize),
    Copy,
    ScrollIndicator,
}

/// Layers the banner is stacked from. Depends on the content only, so the
/// banner has the same shape at every instant and window size.
pub fn layer_plan(content: &HeroContent) -> Vec<HeroLayer> {
    let mut plan = Vec::with_capacity(content.blobs.len() + 3);
    plan.push(HeroLayer::Gradient);
    plan.extend((0..content.blobs.len()).map(HeroLayer::Blob));
    plan.push(HeroLayer::Copy);
    plan.push(HeroLayer::ScrollIndicator);
    plan
}

/// Top-left corner of a blob inside the banner. May be negative: blobs bleed
/// past the banner edges and are clipped there.
pub fn blob_position(spec: &BlobSpec, frame: BlobFrame, banner: Size) -> Point {
    let bounds = blob_bounds(spec, frame, banner);
    Point::new(bounds.x, bounds.y)
}

/// Build the banner for one animation frame.
pub fn hero_banner<'a, L>(
    content: &'a HeroContent,
    frame: &HeroFrame,
    links: &L,
    window: Size,
) -> Element<'a, Message>
where
    L: LinkRenderer + ?Sized,
{
    let height = banner_height(window);
    let banner = Size::new(window.width, height);

    let layers: Vec<Element<'a, Message>> = layer_plan(content)
        .into_iter()
        .map(|layer| match layer {
            HeroLayer::Gradient => gradient(),
            HeroLayer::Blob(index) => {
                blob(&content.blobs[index], frame.blobs[index], banner)
            }
            HeroLayer::Copy => copy(content, links, window),
            HeroLayer::ScrollIndicator => scroll_indicator(frame.indicator_lift),
        })
        .collect();

    column![
        container(stack(layers))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .clip(true),
        container(Space::new().height(Length::Fixed(1.0)))
            .width(Length::Fill)
            .style(theme::divider),
    ]
    .width(Length::Fill)
    .into()
}

fn gradient<'a>() -> Element<'a, Message> {
    container(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::hero_background)
        .into()
}

fn blob<'a>(spec: &BlobSpec, frame: BlobFrame, banner: Size) -> Element<'a, Message> {
    let bounds = blob_bounds(spec, frame, banner);
    let position = blob_position(spec, frame, banner);
    let circle = container(Space::new())
        .width(Length::Fixed(bounds.width))
        .height(Length::Fixed(bounds.height))
        .style(theme::blob(tint_color(spec.tint), layout::BLOB_OPACITY));

    pin(circle)
        .x(position.x)
        .y(position.y)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn copy<'a, L>(content: &'a HeroContent, links: &L, window: Size) -> Element<'a, Message>
where
    L: LinkRenderer + ?Sized,
{
    let small_up = breakpoints::is_small_up(window.width);
    let (heading_size, subheading_size) = if small_up {
        (typography::HEADING.1, typography::SUBHEADING.1)
    } else {
        (typography::HEADING.0, typography::SUBHEADING.0)
    };

    let headings = column![
        text(content.heading)
            .size(heading_size)
            .color(StorefrontTheme::TEXT_BASE)
            .align_x(Horizontal::Center),
        container(
            text(content.subheading)
                .size(subheading_size)
                .color(StorefrontTheme::TEXT_SUBTLE)
                .align_x(Horizontal::Center),
        )
        .max_width(layout::SUBHEADING_MAX_WIDTH),
    ]
    .spacing(layout::HEADING_GAP)
    .align_x(Alignment::Center);

    let actions = row(content
        .actions
        .iter()
        .map(|cta| links.link(cta.destination, cta.label, cta.style)))
    .spacing(layout::CTA_GAP)
    .align_y(Alignment::Center);

    let padding_x = if small_up {
        layout::CONTENT_PADDING_X_SMALL
    } else {
        layout::CONTENT_PADDING_X
    };

    container(
        column![headings, actions]
            .spacing(layout::CONTENT_GAP)
            .align_x(Alignment::Center),
    )
    .padding([0.0, padding_x])
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

fn scroll_indicator<'a>(lift: f32) -> Element<'a, Message> {
    container(
        text(Icon::ArrowDown.unicode().to_string())
            .font(lucide_font())
            .size(layout::INDICATOR_SIZE)
            .color(StorefrontTheme::TEXT_SUBTLE),
    )
    .padding(Padding {
        bottom: layout::INDICATOR_BOTTOM + lift,
        ..Padding::ZERO
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom)
    .into()
}

fn tint_color(tint: BlobTint) -> Color {
    match tint {
        BlobTint::Primary => StorefrontTheme::PRIMARY,
        BlobTint::Accent => StorefrontTheme::ACCENT,
        BlobTint::Secondary => StorefrontTheme::SECONDARY,
    }
}
