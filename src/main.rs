//! Pokedex TUI - tui-dispatch app over PokeAPI

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pokedex::action::Action;
use pokedex::api;
use pokedex::components::{Component, PokedexApp, PokedexAppProps};
use pokedex::config::{Config, SourceKind, DEFAULT_BASE_URL};
use pokedex::effect::Effect;
use pokedex::logging::init_tracing;
use pokedex::reducer::reducer;
use pokedex::source::{source_for, PokeSource};
use pokedex::sprite;
use pokedex::state::AppState;
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Pokedex TUI - browse creatures from PokeAPI
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "List creatures and inspect one")]
struct Args {
    /// Data source backing the list and detail queries
    #[arg(long, short, value_enum, default_value_t = SourceKind::Query)]
    source: SourceKind,

    /// API root the endpoints are resolved against
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Number of entries to list (minimum 1)
    #[arg(long, short, default_value = "9", value_parser = clap::value_parser!(u32).range(1..))]
    page_size: u32,

    /// Skip the on-disk response cache
    #[arg(long)]
    no_cache: bool,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            source: self.source,
            base_url: self.base_url.clone(),
            page_size: self.page_size,
            use_disk_cache: !self.no_cache,
            log_file: self.log_file.clone(),
        }
    }
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum PokedexComponentId {
    List,
    Details,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum PokedexContext {
    List,
    Details,
}

impl EventRoutingState<PokedexComponentId, PokedexContext> for AppState {
    fn focused(&self) -> Option<PokedexComponentId> {
        if self.selected.is_some() {
            Some(PokedexComponentId::Details)
        } else {
            Some(PokedexComponentId::List)
        }
    }

    fn modal(&self) -> Option<PokedexComponentId> {
        None
    }

    fn binding_context(&self, id: PokedexComponentId) -> PokedexContext {
        match id {
            PokedexComponentId::List => PokedexContext::List,
            PokedexComponentId::Details => PokedexContext::Details,
        }
    }

    fn default_context(&self) -> PokedexContext {
        PokedexContext::List
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let config = args.config();
    init_tracing(config.log_file.as_deref())?;
    tracing::info!(source = config.source.label(), base_url = %config.base_url, "starting");

    let debug = DebugSession::new(args.debug);

    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let (source_kind, page_size) = (config.source, config.page_size);
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(source_kind, page_size))
        })
        .await
        .map_err(debug_error)?;
    let replay_actions = debug.load_replay_items().map_err(debug_error)?;
    let (middleware, recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);
    let source = source_for(&config);

    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, source, replay_actions).await;

    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug.save_actions(recorder.as_ref()).map_err(debug_error)?;
    Ok(())
}

struct PokedexUi {
    app: PokedexApp,
}

impl PokedexUi {
    fn new() -> Self {
        Self {
            app: PokedexApp::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<PokedexComponentId>,
    ) {
        let (shown, hidden) = if state.selected.is_some() {
            (PokedexComponentId::Details, PokedexComponentId::List)
        } else {
            (PokedexComponentId::List, PokedexComponentId::Details)
        };
        event_ctx.set_component_area(shown, area);
        event_ctx.component_areas.remove(&hidden);

        let props = PokedexAppProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.app.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = PokedexAppProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.app.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    source: Arc<dyn PokeSource>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(PokedexUi::new()));
    let mut bus: EventBus<AppState, Action, PokedexComponentId, PokedexContext> = EventBus::new();
    let keybindings: Keybindings<PokedexContext> = Keybindings::new();

    let ui_list = Rc::clone(&ui);
    bus.register(PokedexComponentId::List, move |event, state| {
        ui_list.borrow_mut().handle_event(&event.kind, state)
    });

    let ui_details = Rc::clone(&ui);
    bus.register(PokedexComponentId::Details, move |event, state| {
        ui_details.borrow_mut().handle_event(&event.kind, state)
    });

    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(width, height) => {
            HandlerResponse::action(Action::UiTerminalResize(width, height)).with_render()
        }
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(&source, effect, ctx),
        )
        .await
}

/// Run each query as a keyed task; one in-flight task per key
fn handle_effect(source: &Arc<dyn PokeSource>, effect: Effect, ctx: &mut EffectContext<Action>) {
    let key = effect.task_key();
    tracing::debug!(key = %effect.key_label(), "spawning query");
    match effect {
        Effect::FetchListing { limit } => {
            let source = Arc::clone(source);
            ctx.tasks().spawn(key, async move {
                match source.listing(limit).await {
                    Ok(listing) => Action::ListingDidLoad(listing),
                    Err(error) => {
                        tracing::warn!(limit, %error, "listing query failed");
                        Action::ListingDidError(error.to_string())
                    }
                }
            });
        }
        Effect::FetchDetail { name } => {
            let source = Arc::clone(source);
            ctx.tasks().spawn(key, async move {
                match source.detail(&name).await {
                    Ok(detail) => Action::DetailDidLoad { name, detail },
                    Err(error) => {
                        tracing::warn!(%name, %error, "detail query failed");
                        Action::DetailDidError {
                            name,
                            error: error.to_string(),
                        }
                    }
                }
            });
        }
        Effect::FetchSprite { url } => {
            let source = Arc::clone(source);
            ctx.tasks().spawn(key, async move {
                let decoded = match api::fetch_bytes_cached(&url, source.cache()).await {
                    Ok(bytes) => sprite::decode_sprite(&bytes),
                    Err(error) => Err(error.to_string()),
                };
                match decoded {
                    Ok(sprite) => Action::SpriteDidLoad { url, sprite },
                    Err(error) => {
                        tracing::debug!(%url, %error, "sprite unavailable");
                        Action::SpriteDidError { url, error }
                    }
                }
            });
        }
    }
}
