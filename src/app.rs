use crate::canvas::Canvas;
use crate::core::{App, AppControl, FrameCtx};
use crate::input::{InputEvent, Key};
use crate::render::QuadRenderer;
use crate::sim::{Player, SimConfig};
use crate::time::StepClock;

/// The demo application: one player rectangle on a fixed-timestep loop.
///
/// Per frame: ask the step clock how many fixed steps the elapsed time
/// covers; for each step repaint the background, advance the player and let
/// it draw itself; then flush the recorded canvas to the GPU. Frames that
/// cover zero steps re-present the retained canvas contents.
pub struct DriftApp {
    config: SimConfig,
    clock: StepClock,
    renderer: QuadRenderer,

    /// Bound on the first frame, once the surface size is known.
    scene: Option<Scene>,
}

struct Scene {
    canvas: Canvas,
    player: Player,
}

impl DriftApp {
    pub fn new(config: SimConfig) -> Self {
        Self {
            clock: StepClock::new(config.fixed_interval),
            renderer: QuadRenderer::new(),
            scene: None,
            config,
        }
    }
}

impl App for DriftApp {
    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        let Some(scene) = self.scene.as_mut() else {
            return AppControl::Continue;
        };

        match event {
            InputEvent::Key { key, state, .. } => scene.player.set_input(*key, *state),

            // Drop held turn flags so a key released while unfocused
            // does not keep the player spinning.
            InputEvent::Focused(false) => scene.player.clear_input(),
            InputEvent::Focused(true) => {}
        }

        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input.key_down(Key::Escape) {
            return AppControl::Exit;
        }

        if self.scene.is_none() {
            // Surface dimensions are captured once here and never re-queried;
            // the demo does not handle resizes.
            let viewport = ctx.window.logical_viewport();
            log::info!(
                "scene bound to {:.0}x{:.0} surface",
                viewport.width,
                viewport.height
            );

            self.scene = Some(Scene {
                canvas: Canvas::new(viewport),
                player: Player::new(viewport.center(), &self.config),
            });
        }
        let Some(scene) = self.scene.as_mut() else {
            return AppControl::Continue;
        };

        let steps = self.clock.advance(ctx.time.now);
        for _ in 0..steps {
            let bounds = scene.canvas.bounds();
            scene.canvas.clear_rect(bounds);
            scene.canvas.set_fill(self.config.background);
            scene.canvas.fill_rect(bounds);

            scene.player.step();
            scene.player.render(&mut scene.canvas);
        }

        let renderer = &mut self.renderer;
        let canvas = &scene.canvas;
        ctx.render(self.config.background, |rctx, target| {
            renderer.render(rctx, target, canvas.quads());
        })
    }
}
