//! Exports [`GameEngine`], which owns the window and drives the triangle scene.
use crate::{
    config::EngineConfig,
    error::EngineError,
    game_loop::{run_frame_loop, WindowHandler},
    gl_wrappers::GlApi,
    platform::{Platform, SdlPlatform, Surface},
    scene::TriangleScene,
    vertex::VertexData,
};

/// Where the engine is in its lifetime. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    NotInitialised,
    Initialised,
    Running,
    /// The window was closed. Terminal.
    Stopped,
}

pub struct GameEngine<P: Platform = SdlPlatform> {
    platform: P,
    config: EngineConfig,
    vertices: VertexData,
    state: EngineState,
    context: Option<(P::Window, P::Gl)>,
}

impl GameEngine<SdlPlatform> {
    /// An engine that opens its window through SDL2.
    ///
    /// # Errors
    /// See [`GameEngine::with_platform`].
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_platform(SdlPlatform, config)
    }
}

impl<P: Platform> GameEngine<P> {
    /// # Errors
    /// Errors if `config.vertices` does not hold whole xyz triples.
    pub fn with_platform(platform: P, config: EngineConfig) -> Result<Self, EngineError> {
        let vertices = VertexData::new(config.vertices.clone())?;
        Ok(Self {
            platform,
            config,
            vertices,
            state: EngineState::NotInitialised,
            context: None,
        })
    }

    /// Bring up the window, the GL context and the GL bindings.
    ///
    /// Does nothing if the engine was already initialised. After a failure
    /// the engine stays uninitialised and [`GameEngine::run`] refuses to start.
    ///
    /// # Errors
    /// Errors with whatever the platform reported.
    pub fn initialise(&mut self) -> Result<(), EngineError> {
        if self.state != EngineState::NotInitialised {
            log::warn!("Game engine already initialised ({:?})", self.state);
            return Ok(());
        }
        match self.platform.initialise(&self.config.window) {
            Ok(context) => {
                self.context = Some(context);
                self.state = EngineState::Initialised;
                log::info!("Successfully initialised game engine");
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to initialise game engine: {e}");
                Err(e)
            }
        }
    }

    /// Run the frame loop until the window is closed.
    ///
    /// A no-op once the loop has been started; the engine cannot be restarted.
    ///
    /// # Errors
    /// Errors if the engine was never successfully initialised.
    pub fn run(&mut self) -> Result<(), EngineError> {
        match self.state {
            EngineState::NotInitialised => return Err(EngineError::NotInitialised),
            EngineState::Running | EngineState::Stopped => {
                log::debug!("Game loop already started ({:?})", self.state);
                return Ok(());
            }
            EngineState::Initialised => {}
        }
        let Some((window, gl)) = self.context.as_mut() else {
            return Err(EngineError::NotInitialised);
        };

        self.state = EngineState::Running;
        log::info!("Starting game loop");

        let mut driver = SceneDriver {
            gl: &*gl,
            vertices: &self.vertices,
            config: &self.config,
            scene: None,
        };
        run_frame_loop(window, &mut driver, self.config.window.fps_cap);

        self.state = EngineState::Stopped;
        Ok(())
    }

    pub fn state(&self) -> EngineState {
        self.state
    }
    /// Whether the game loop has ever been started. Stays true after the
    /// window closes.
    pub fn is_running(&self) -> bool {
        matches!(self.state, EngineState::Running | EngineState::Stopped)
    }
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Connects the loop callbacks to the triangle scene.
struct SceneDriver<'a, G: GlApi> {
    gl: &'a G,
    vertices: &'a VertexData,
    config: &'a EngineConfig,
    scene: Option<TriangleScene>,
}

impl<G: GlApi> WindowHandler for SceneDriver<'_, G> {
    fn on_load(&mut self) {
        match TriangleScene::load(self.gl, self.vertices.clone(), self.config) {
            Ok(scene) => self.scene = Some(scene),
            Err(e) => log::error!("Failed to load scene: {e}"),
        }
    }

    fn on_unload(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            scene.unload(self.gl);
        }
    }

    fn on_update_frame(&mut self, delta: f32) {
        if let Some(scene) = self.scene.as_mut() {
            scene.update(delta);
        }
    }

    fn on_render_frame(&mut self, _delta: f32, surface: &mut dyn Surface) {
        if let Some(scene) = &self.scene {
            let (width, height) = surface.drawable_size();
            scene.render(self.gl, width, height);
        }
        surface.swap_buffers();
    }
}
