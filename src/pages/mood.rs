//! Mood page
//!
//! Two faces side by side above a feedback label. Tapping a face toggles its
//! palette and writes that face's mood into the label. The label text and
//! both moods are kept across suspend/resume.

use embedded_graphics::prelude::*;
use embedded_graphics::{
    Drawable as EgDrawable,
    pixelcolor::Rgb565,
    primitives::{PrimitiveStyle, Rectangle},
};
use log::debug;

use crate::pages::constants::{FEEDBACK_KEY, HAPPY_FACE_KEY, LABEL_ROW_HEIGHT_PX, SAD_FACE_KEY};
use crate::pages::page::Page;
use crate::ui::components::{EmoFace, EmoFaceConfig, EmoFaceState, Label, Mood, TextSize};
use crate::ui::core::{
    Action, DirtyRegion, Drawable, Measurable, PageId, StateCapturable, TouchEvent, TouchResult,
    Touchable,
};
use crate::ui::state::{CaptureError, InstanceState, RestoreError};
use crate::ui::styling::{COLOR_BACKGROUND, WHITE};

/// Label text before any face has been tapped
const INITIAL_FEEDBACK: &str = "Happy";

/// Page hosting a happy face, a sad face and a feedback label
pub struct MoodPage {
    bounds: Rectangle,
    happy: EmoFace,
    sad: EmoFace,
    feedback: Label,
    dirty: bool,
}

impl MoodPage {
    pub fn new(bounds: Rectangle) -> Self {
        let happy = EmoFace::new(
            EmoFaceConfig::new()
                .with_mood(Mood::Happy)
                .with_face_toggle_color(Rgb565::GREEN)
                .with_action(Action::MoodSelected(Mood::Happy)),
        );

        let sad = EmoFace::new(
            EmoFaceConfig::new()
                .with_mood(Mood::Sad)
                .with_face_color(Rgb565::CYAN)
                .with_face_toggle_color(Rgb565::RED)
                .with_eyes_toggle_color(Rgb565::WHITE)
                .with_border_width(6.0)
                .with_action(Action::MoodSelected(Mood::Sad)),
        );

        let feedback = Label::new(Rectangle::zero(), INITIAL_FEEDBACK, TextSize::Large)
            .with_color(WHITE)
            .with_background(COLOR_BACKGROUND);

        let mut page = Self {
            bounds,
            happy,
            sad,
            feedback,
            dirty: true,
        };
        page.layout();
        page
    }

    /// Split the area above the label row into two halves and center a
    /// square face in each.
    fn layout(&mut self) {
        let origin = self.bounds.top_left;
        let width = self.bounds.size.width;
        let face_area_height = self.bounds.size.height.saturating_sub(LABEL_ROW_HEIGHT_PX);
        let half_width = width / 2;

        for (index, face) in [&mut self.happy, &mut self.sad].into_iter().enumerate() {
            let side = face.measure(half_width, face_area_height);
            let x = origin.x + (index as u32 * half_width + (half_width - side) / 2) as i32;
            let y = origin.y + ((face_area_height - side) / 2) as i32;
            face.set_origin(Point::new(x, y));
        }

        self.feedback.set_bounds(Rectangle::new(
            Point::new(origin.x, origin.y + face_area_height as i32),
            Size::new(width, LABEL_ROW_HEIGHT_PX),
        ));

        debug!(
            "Mood page layout: faces {}px, label at y={}",
            self.happy.size(),
            origin.y + face_area_height as i32
        );
    }

    pub fn happy_face(&self) -> &EmoFace {
        &self.happy
    }

    pub fn sad_face(&self) -> &EmoFace {
        &self.sad
    }

    pub fn happy_face_mut(&mut self) -> &mut EmoFace {
        &mut self.happy
    }

    pub fn sad_face_mut(&mut self) -> &mut EmoFace {
        &mut self.sad
    }

    /// Current feedback label text
    pub fn feedback(&self) -> &str {
        self.feedback.text()
    }
}

impl Page for MoodPage {
    fn id(&self) -> PageId {
        PageId::Mood
    }

    fn title(&self) -> &str {
        "Mood"
    }

    fn on_activate(&mut self) {
        self.dirty = true;
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        for face in [&mut self.happy, &mut self.sad] {
            match face.handle_touch(event) {
                TouchResult::Action(Action::MoodSelected(mood)) => {
                    self.feedback.set_text(mood.label());
                    return Some(Action::MoodSelected(mood));
                }
                TouchResult::Handled => return None,
                TouchResult::NotHandled => {}
            }
        }
        None
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        Drawable::draw(self, display)
    }

    fn bounds(&self) -> Rectangle {
        Drawable::bounds(self)
    }

    fn is_dirty(&self) -> bool {
        Drawable::is_dirty(self)
    }

    fn mark_clean(&mut self) {
        Drawable::mark_clean(self)
    }

    fn mark_dirty(&mut self) {
        Drawable::mark_dirty(self)
    }

    fn save_state(&self, state: &mut InstanceState) -> Result<(), CaptureError> {
        state.put_str(FEEDBACK_KEY, self.feedback.text())?;
        self.happy.save_into(state, HAPPY_FACE_KEY)?;
        self.sad.save_into(state, SAD_FACE_KEY)?;
        Ok(())
    }

    fn restore_state(&mut self, state: &InstanceState) -> Result<(), RestoreError> {
        // Decode everything first so a bad entry leaves the page untouched
        let feedback = state.get_str(FEEDBACK_KEY)?;
        let happy = state.get::<EmoFaceState>(HAPPY_FACE_KEY)?;
        let sad = state.get::<EmoFaceState>(SAD_FACE_KEY)?;

        self.feedback
            .set_text(feedback.as_deref().unwrap_or(INITIAL_FEEDBACK));
        if let Some(saved) = happy {
            self.happy.restore_state(saved);
        }
        if let Some(saved) = sad {
            self.sad.restore_state(saved);
        }
        self.dirty = true;
        Ok(())
    }
}

impl Drawable for MoodPage {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        // Clear background.
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(COLOR_BACKGROUND))
            .draw(display)?;

        self.happy.draw(display)?;
        self.sad.draw(display)?;
        self.feedback.draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.happy.is_dirty() || self.sad.is_dirty() || self.feedback.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.happy.mark_clean();
        self.sad.mark_clean();
        self.feedback.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Smallest rectangle covering every dirty child
    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.dirty {
            return Some(DirtyRegion::new(self.bounds));
        }

        let children = [
            self.happy.dirty_region(),
            self.sad.dirty_region(),
            self.feedback.dirty_region(),
        ];
        children
            .into_iter()
            .flatten()
            .reduce(|mut acc, region| {
                acc.expand_to_include(region.bounds);
                acc
            })
    }
}
