use crate::host::{Host, HostRequest, Sound};
use crate::input::KeyEvent;
use crate::systems::ingest_inputs;
use crate::{
    step, Arena, Ball, Config, Events, GameRng, InputQueue, InputState, MenuStateMachine,
    Paddle, Params, Score, Side, Time,
};

/// Everything the game mutates, owned in one place and advanced once per frame
pub struct GameState {
    pub config: Config,
    pub arena: Arena,
    pub paddles: [Paddle; 2], // player, cpu
    pub ball: Ball,
    pub score: Score,
    pub input: InputState,
    pub menu: MenuStateMachine,
    pub time: Time,
    pub events: Events,
    pub input_queue: InputQueue,
    pub rng: GameRng,
    requests: Vec<HostRequest>,
    exit_requested: bool,
}

impl GameState {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let arena = Arena::from(&config);
        let paddle = |side| {
            Paddle::new(
                side,
                config.paddle_x(side),
                Params::PADDLE_START_Y,
                config.paddle_width,
                config.paddle_height,
            )
        };
        let mut cpu = paddle(Side::Cpu);
        cpu.direction = crate::Direction::Up;
        let paddles = [paddle(Side::Player), cpu];
        let ball = Ball::new(arena.center(), config.ball_size, rng.speed_fraction());

        // Music is always registered; with audio off it waits for an unpause
        let mut requests = Vec::new();
        if !config.audio_enabled {
            requests.push(HostRequest::SetAudioPaused(true));
        }
        requests.push(HostRequest::LoopMusic(Sound::Music));

        Self {
            menu: MenuStateMachine::new(&config),
            arena,
            paddles,
            ball,
            score: Score::new(),
            input: InputState::new(),
            time: Time::new(0.0, 0.0),
            events: Events::new(),
            input_queue: InputQueue::new(),
            rng,
            requests,
            exit_requested: false,
            config,
        }
    }

    /// Queue a key event for the next update
    pub fn push_key(&mut self, event: KeyEvent) {
        self.input_queue.push(event);
    }

    /// Advance one frame by `dt` seconds of wall-clock time
    pub fn update(&mut self, dt: f32) {
        self.events.clear();

        if ingest_inputs(
            &mut self.input_queue,
            &mut self.menu,
            &mut self.config,
            &mut self.input,
            &mut self.requests,
        ) {
            self.exit_requested = true;
        }

        let dt = dt.clamp(0.0, Params::MAX_DT);
        if self.menu.update(dt) {
            self.input.clear();
        }
        if !self.menu.is_in_game() {
            return;
        }

        self.time.dt = dt;
        step(
            &mut self.paddles,
            &mut self.ball,
            &mut self.time,
            &self.arena,
            &self.config,
            &self.input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        if self.events.scored().is_some() && self.config.audio_enabled {
            self.requests.push(HostRequest::Play(Sound::Score));
        }
    }

    pub fn player_paddle(&self) -> &Paddle {
        &self.paddles[0]
    }

    pub fn cpu_paddle(&self) -> &Paddle {
        &self.paddles[1]
    }

    /// A quit was chosen; the host should shut down
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn pending_requests(&self) -> &[HostRequest] {
        &self.requests
    }

    /// Hand queued requests to the host, in the order they were made
    pub fn dispatch<H: Host + ?Sized>(&mut self, host: &mut H) {
        for request in self.requests.drain(..) {
            request.dispatch(host);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Config::default(), GameRng::default())
    }
}
