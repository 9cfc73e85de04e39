//! Side panel for the resume builder: template, block palette, and the form
//! for the selected block.
//!
//! DESIGN
//! ======
//! Forms are rebuilt only when the selected block (or an entry count)
//! changes. Field values are bound per input, so typing never replaces the
//! focused element.

use chrono::Utc;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use resume::{
    BlockData, BlockKind, EditorEvent, EducationData, EducationField, ExperienceData, ExperienceField, HeaderField,
    TEMPLATES, TemplateId,
};

use crate::state::resume::ResumeState;

fn edit(resume: RwSignal<ResumeState>, id: &str, mutate: impl FnOnce(&mut BlockData)) {
    resume.update(|s| {
        s.edit_block(id, Utc::now(), mutate);
    });
}

fn dispatch(resume: RwSignal<ResumeState>, event: EditorEvent) {
    resume.update(|s| {
        s.dispatch(event, Utc::now());
    });
}

fn read<T: Default>(resume: RwSignal<ResumeState>, id: &str, f: impl FnOnce(&BlockData) -> T) -> T {
    resume.with(|s| s.document().block(id).map(|b| f(&b.data)).unwrap_or_default())
}

#[component]
pub fn BlockEditor() -> impl IntoView {
    let resume = expect_context::<RwSignal<ResumeState>>();
    let selected = Memo::new(move |_| resume.with(|s| s.editor.selected_block().map(|b| (b.id.clone(), b.kind()))));

    view! {
        <aside class="block-editor">
            <TemplatePicker />
            <BlockPalette />
            {move || match selected.get() {
                None => {
                    view! { <p class="block-editor__hint">"Select a block on the page to edit it."</p> }.into_any()
                }
                Some((id, kind)) => {
                    let form = match kind {
                        BlockKind::Header => view! { <HeaderForm id=id.clone() /> }.into_any(),
                        BlockKind::Summary => view! { <SummaryForm id=id.clone() /> }.into_any(),
                        BlockKind::Experience => view! { <ExperienceForm id=id.clone() /> }.into_any(),
                        BlockKind::Education => view! { <EducationForm id=id.clone() /> }.into_any(),
                        BlockKind::Skills => view! { <SkillsForm id=id.clone() /> }.into_any(),
                    };
                    view! {
                        <section class="block-editor__form">
                            <header class="block-editor__form-header">
                                <h3>{kind.label()}</h3>
                                <BlockActions id=id />
                            </header>
                            {form}
                        </section>
                    }
                        .into_any()
                }
            }}
        </aside>
    }
}

#[component]
fn TemplatePicker() -> impl IntoView {
    let resume = expect_context::<RwSignal<ResumeState>>();
    let current = Memo::new(move |_| resume.with(|s| s.document().template_id));

    view! {
        <label class="form-field">
            <span class="form-field__label">"Template"</span>
            <select on:change=move |ev| {
                if let Some(template) = TemplateId::parse(&event_target_value(&ev)) {
                    dispatch(resume, EditorEvent::SetTemplate(template));
                }
            }>
                {TEMPLATES
                    .iter()
                    .map(|t| {
                        let id = t.id;
                        view! {
                            <option value=id.as_str() selected=move || current.get() == id>
                                {t.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
fn BlockPalette() -> impl IntoView {
    let resume = expect_context::<RwSignal<ResumeState>>();

    view! {
        <div class="block-palette">
            <span class="form-field__label">"Add block"</span>
            {BlockKind::ALL
                .into_iter()
                .map(|kind| {
                    view! {
                        <button
                            class="btn btn--small"
                            on:click=move |_| {
                                let id = uuid::Uuid::new_v4().to_string();
                                dispatch(resume, EditorEvent::Add { id, kind });
                            }
                        >
                            {format!("+ {}", kind.label())}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn BlockActions(id: String) -> impl IntoView {
    let resume = expect_context::<RwSignal<ResumeState>>();
    let (up, down, remove) = (id.clone(), id.clone(), id);

    view! {
        <div class="block-actions">
            <button class="btn btn--small" title="Move up" on:click=move |_| dispatch(resume, EditorEvent::MoveUp(up.clone()))>
                "↑"
            </button>
            <button
                class="btn btn--small"
                title="Move down"
                on:click=move |_| dispatch(resume, EditorEvent::MoveDown(down.clone()))
            >
                "↓"
            </button>
            <button
                class="btn btn--small btn--danger"
                title="Remove block"
                on:click=move |_| dispatch(resume, EditorEvent::Remove(remove.clone()))
            >
                "Remove"
            </button>
        </div>
    }
}

#[component]
fn HeaderForm(id: String) -> impl IntoView {
    let resume = expect_context::<RwSignal<ResumeState>>();

    HeaderField::ALL
        .into_iter()
        .map(|field| {
            let (read_id, write_id) = (id.clone(), id.clone());
            view! {
                <label class="form-field">
                    <span class="form-field__label">{field.label()}</span>
                    <input
                        type="text"
                        prop:value=move || {
                            read(resume, &read_id, |data| match data {
                                BlockData::Header(h) => field.get(h).to_owned(),
                                _ => String::new(),
                            })
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(resume, &write_id, |data| {
                                if let BlockData::Header(h) = data {
                                    field.set(h, value);
                                }
                            });
                        }
                    />
                </label>
            }
        })
        .collect_view()
}

#[component]
fn SummaryForm(id: String) -> impl IntoView {
    let resume = expect_context::<RwSignal<ResumeState>>();
    let read_id = id.clone();

    view! {
        <label class="form-field">
            <span class="form-field__label">"Summary"</span>
            <textarea
                rows="6"
                prop:value=move || {
                    read(resume, &read_id, |data| match data {
                        BlockData::Summary(s) => s.text.clone(),
                        _ => String::new(),
                    })
                }
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    edit(resume, &id, |data| {
                        if let BlockData::Summary(s) = data {
                            s.text = text;
                        }
                    });
                }
            ></textarea>
        </label>
    }
}

fn experience(data: &BlockData) -> Option<&ExperienceData> {
    match data {
        BlockData::Experience(e) => Some(e),
        _ => None,
    }
}

fn education(data: &BlockData) -> Option<&EducationData> {
    match data {
        BlockData::Education(e) => Some(e),
        _ => None,
    }
}

#[component]
fn ExperienceForm(id: String) -> impl IntoView {
    let resume = expect_context::<RwSignal<ResumeState>>();
    let count = {
        let id = id.clone();
        Memo::new(move |_| read(resume, &id, |data| experience(data).map_or(0, |e| e.entries.len())))
    };
    let add_id = id.clone();

    view! {
        {move || {
            (0..count.get())
                .map(|index| {
                    let remove_id = id.clone();
                    let fields = ExperienceField::ALL
                        .into_iter()
                        .map(|field| {
                            let (read_id, write_id) = (id.clone(), id.clone());
                            let value = move || {
                                read(resume, &read_id, |data| {
                                    experience(data)
                                        .and_then(|e| e.entries.get(index))
                                        .map(|entry| field.get(entry).to_owned())
                                        .unwrap_or_default()
                                })
                            };
                            let on_input = move |ev: leptos::ev::Event| {
                                let value = event_target_value(&ev);
                                edit(resume, &write_id, |data| {
                                    if let BlockData::Experience(e) = data {
                                        if let Some(entry) = e.entries.get_mut(index) {
                                            field.set(entry, value);
                                        }
                                    }
                                });
                            };
                            let input = if field == ExperienceField::Description {
                                view! { <textarea rows="3" prop:value=value on:input=on_input></textarea> }.into_any()
                            } else {
                                view! { <input type="text" prop:value=value on:input=on_input /> }.into_any()
                            };
                            view! {
                                <label class="form-field">
                                    <span class="form-field__label">{field.label()}</span>
                                    {input}
                                </label>
                            }
                        })
                        .collect_view();
                    view! {
                        <fieldset class="entry-form">
                            {fields}
                            <button
                                class="btn btn--small btn--danger"
                                on:click=move |_| {
                                    edit(resume, &remove_id, |data| {
                                        if let BlockData::Experience(e) = data {
                                            e.remove_entry(index);
                                        }
                                    });
                                }
                            >
                                "Remove position"
                            </button>
                        </fieldset>
                    }
                })
                .collect_view()
        }}
        <button
            class="btn btn--small"
            on:click=move |_| {
                edit(resume, &add_id, |data| {
                    if let BlockData::Experience(e) = data {
                        e.add_entry();
                    }
                });
            }
        >
            "+ Add position"
        </button>
    }
}

#[component]
fn EducationForm(id: String) -> impl IntoView {
    let resume = expect_context::<RwSignal<ResumeState>>();
    let count = {
        let id = id.clone();
        Memo::new(move |_| read(resume, &id, |data| education(data).map_or(0, |e| e.entries.len())))
    };
    let add_id = id.clone();

    view! {
        {move || {
            (0..count.get())
                .map(|index| {
                    let remove_id = id.clone();
                    let fields = EducationField::ALL
                        .into_iter()
                        .map(|field| {
                            let (read_id, write_id) = (id.clone(), id.clone());
                            view! {
                                <label class="form-field">
                                    <span class="form-field__label">{field.label()}</span>
                                    <input
                                        type="text"
                                        prop:value=move || {
                                            read(resume, &read_id, |data| {
                                                education(data)
                                                    .and_then(|e| e.entries.get(index))
                                                    .map(|entry| field.get(entry).to_owned())
                                                    .unwrap_or_default()
                                            })
                                        }
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            edit(resume, &write_id, |data| {
                                                if let BlockData::Education(e) = data {
                                                    if let Some(entry) = e.entries.get_mut(index) {
                                                        field.set(entry, value);
                                                    }
                                                }
                                            });
                                        }
                                    />
                                </label>
                            }
                        })
                        .collect_view();
                    view! {
                        <fieldset class="entry-form">
                            {fields}
                            <button
                                class="btn btn--small btn--danger"
                                on:click=move |_| {
                                    edit(resume, &remove_id, |data| {
                                        if let BlockData::Education(e) = data {
                                            e.remove_entry(index);
                                        }
                                    });
                                }
                            >
                                "Remove school"
                            </button>
                        </fieldset>
                    }
                })
                .collect_view()
        }}
        <button
            class="btn btn--small"
            on:click=move |_| {
                edit(resume, &add_id, |data| {
                    if let BlockData::Education(e) = data {
                        e.add_entry();
                    }
                });
            }
        >
            "+ Add school"
        </button>
    }
}

#[component]
fn SkillsForm(id: String) -> impl IntoView {
    let resume = expect_context::<RwSignal<ResumeState>>();
    let pending = RwSignal::new(String::new());
    let items = {
        let id = id.clone();
        Memo::new(move |_| {
            read(resume, &id, |data| match data {
                BlockData::Skills(s) => s.items.clone(),
                _ => Vec::new(),
            })
        })
    };
    let add = {
        let id = id.clone();
        move || {
            let skill = pending.get_untracked();
            edit(resume, &id, |data| {
                if let BlockData::Skills(s) = data {
                    s.add(&skill);
                }
            });
            pending.set(String::new());
        }
    };
    let add_on_key = add.clone();

    view! {
        <ul class="skill-list">
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|skill| {
                        let id = id.clone();
                        let label = skill.clone();
                        view! {
                            <li class="tag">
                                {label}
                                <button
                                    class="tag__remove"
                                    aria-label="Remove skill"
                                    on:click=move |_| {
                                        edit(resume, &id, |data| {
                                            if let BlockData::Skills(s) = data {
                                                s.remove(&skill);
                                            }
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
        <div class="skill-add">
            <input
                type="text"
                placeholder="Add a skill"
                prop:value=move || pending.get()
                on:input=move |ev| pending.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        add_on_key();
                    }
                }
            />
            <button class="btn btn--small" on:click=move |_| add()>
                "Add"
            </button>
        </div>
    }
}
