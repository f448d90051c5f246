use crate::theme::Theme;
use noughts_core as game;
use game::{BOARD_SIDE, CellIndex, from_row_col};
use serde::{Deserialize, Serialize};
use yew::prelude::*;

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::MoveOutcome, E> {
    fn has_update(self) -> bool {
        self.is_ok()
    }
}

fn state_class(outcome: game::Outcome) -> &'static str {
    use game::Outcome::*;
    match outcome {
        InProgress => "in-progress",
        Won(_) => "win",
        Drawn => "draw",
    }
}

fn cell_classes(cell: game::Cell, winning: bool, locked: bool) -> Classes {
    use game::{Cell::*, Mark};

    let mut class = classes!(
        "cell",
        match cell {
            Empty => classes!(),
            Marked(Mark::X) => classes!("x"),
            Marked(Mark::O) => classes!("o"),
        }
    );
    if winning {
        class.push("win");
    }
    if locked {
        class.push("locked");
    }
    class
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    Play(CellIndex),
    NewGame,
    ToggleTheme,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: CellIndex,
    cell: game::Cell,
    #[prop_or_default]
    winning: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<CellIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        cell,
        winning,
        locked,
        callback,
    } = props.clone();

    let class = cell_classes(cell, winning, locked);
    let symbol = cell.mark().map_or("", game::Mark::symbol);

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <td {class} {onclick}>{symbol}</td>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub theme: Theme,
}

#[derive(Debug)]
pub(crate) struct GameView {
    engine: game::PlayEngine,
    theme: Theme,
}

impl GameView {
    fn play(&mut self, index: CellIndex) -> bool {
        let result = self.engine.play(index.into());
        if let Err(err) = &result {
            log::debug!("move at {} ignored: {}", index, err);
        }
        result.has_update()
    }

    fn new_game(&mut self) -> bool {
        let updated = self.engine.moves_played() > 0;
        self.engine.reset();
        updated
    }

    fn toggle_theme(&mut self) -> bool {
        self.theme = self.theme.toggled();
        self.theme.apply();
        true
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            engine: game::PlayEngine::new(),
            theme: ctx.props().theme,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        log::debug!("update: {:?}", msg);
        match msg {
            Play(index) => self.play(index),
            NewGame => self.new_game(),
            ToggleTheme => self.toggle_theme(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let outcome = self.engine.outcome();
        let winning_line = self.engine.winning_line();
        let status = self.engine.status().to_string();

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });
        let cb_toggle_theme = ctx.link().callback(|_| ToggleTheme);

        html! {
            <div class={classes!("noughts", state_class(outcome))}>
                <nav>
                    <output>{status}</output>
                    <span><button class="new-game" onclick={cb_new_game}>{"New game"}</button></span>
                    <small onclick={cb_toggle_theme}>{self.theme.toggled().scheme()}</small>
                </nav>
                <table class={(!outcome.is_finished()).then_some("playable")}>
                    {
                        for (0..BOARD_SIDE).map(|row| html! {
                            <tr>
                                {
                                    for (0..BOARD_SIDE).map(|col| {
                                        let index = from_row_col((row, col));
                                        let cell = self.engine.cell_at(index).unwrap_or_default();
                                        let winning =
                                            winning_line.is_some_and(|line| line.contains(index));
                                        let locked = !self.engine.can_play_at(index);
                                        let callback = ctx.link().callback(Msg::Play);
                                        html! {
                                            <CellView {index} {cell} {winning} {locked} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
            </div>
        }
    }
}
