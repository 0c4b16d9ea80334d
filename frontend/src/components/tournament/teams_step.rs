use yew::prelude::*;

use super::draft::{DraftAction, TournamentDraft, AVATARS};

#[derive(Properties, Clone, PartialEq)]
pub struct TeamsStepProps {
    pub draft: TournamentDraft,
    pub on_action: Callback<DraftAction>,
}

#[function_component(TeamsStep)]
pub fn teams_step(props: &TeamsStepProps) -> Html {
    let on_add_team = {
        let on_action = props.on_action.clone();
        Callback::from(move |_| on_action.emit(DraftAction::AddTeam))
    };

    html! {
        <div class="space-y-6">
            <p class="text-sm text-gray-600">
                {"A tournament needs at least two teams. Every team needs a name and at least one player; every player needs a name and an avatar."}
            </p>

            {for props.draft.teams.iter().enumerate().map(|(team_idx, team)| {
                let on_action = props.on_action.clone();
                let on_team_name = {
                    let on_action = on_action.clone();
                    Callback::from(move |e: InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        on_action.emit(DraftAction::SetTeamName(team_idx, input.value()));
                    })
                };
                let on_remove_team = {
                    let on_action = on_action.clone();
                    Callback::from(move |_| on_action.emit(DraftAction::RemoveTeam(team_idx)))
                };
                let on_add_player = {
                    let on_action = on_action.clone();
                    Callback::from(move |_| on_action.emit(DraftAction::AddPlayer(team_idx)))
                };

                html! {
                    <div class="border border-gray-200 rounded-lg p-4 space-y-3">
                        <div class="flex items-center gap-2">
                            <input
                                type="text"
                                value={team.name.clone()}
                                oninput={on_team_name}
                                placeholder={format!("Team {}", team_idx + 1)}
                                class="flex-1 px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                            />
                            <button
                                onclick={on_remove_team}
                                disabled={props.draft.teams.len() <= 2}
                                class="px-3 py-2 text-sm text-red-600 hover:text-red-800 disabled:opacity-40"
                                title="Remove team"
                            >
                                {"Remove"}
                            </button>
                        </div>

                        <div class="space-y-2">
                            {for team.players.iter().enumerate().map(|(player_idx, player)| {
                                let on_action = props.on_action.clone();
                                let on_player_name = {
                                    let on_action = on_action.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        on_action.emit(DraftAction::SetPlayerName(team_idx, player_idx, input.value()));
                                    })
                                };
                                let on_avatar_change = {
                                    let on_action = on_action.clone();
                                    Callback::from(move |e: Event| {
                                        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                        on_action.emit(DraftAction::SetPlayerAvatar(team_idx, player_idx, select.value()));
                                    })
                                };
                                let on_remove_player = {
                                    let on_action = on_action.clone();
                                    Callback::from(move |_| {
                                        on_action.emit(DraftAction::RemovePlayer(team_idx, player_idx));
                                    })
                                };

                                html! {
                                    <div class="flex items-center gap-2">
                                        <input
                                            type="text"
                                            value={player.name.clone()}
                                            oninput={on_player_name}
                                            placeholder="Player name"
                                            class="flex-1 px-3 py-1.5 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                                        />
                                        <select
                                            value={player.avatar.clone()}
                                            onchange={on_avatar_change}
                                            class="px-2 py-1.5 border border-gray-300 rounded-md text-sm"
                                        >
                                            <option value="" selected={player.avatar.is_empty()}>{"Avatar…"}</option>
                                            {for AVATARS.iter().map(|avatar| html! {
                                                <option value={*avatar} selected={player.avatar == *avatar}>{*avatar}</option>
                                            })}
                                        </select>
                                        <button
                                            onclick={on_remove_player}
                                            disabled={team.players.len() <= 1}
                                            class="px-2 py-1.5 text-sm text-red-600 hover:text-red-800 disabled:opacity-40"
                                            title="Remove player"
                                        >
                                            {"✕"}
                                        </button>
                                    </div>
                                }
                            })}
                        </div>

                        <button
                            onclick={on_add_player}
                            class="text-sm text-blue-600 hover:text-blue-800"
                        >
                            {"+ Add player"}
                        </button>
                    </div>
                }
            })}

            <button
                onclick={on_add_team}
                class="px-4 py-2 text-sm bg-gray-100 text-gray-700 rounded-md hover:bg-gray-200"
            >
                {"+ Add team"}
            </button>
        </div>
    }
}
