use crate::components::entry_card::EntryCard;
use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, Input, Label, Spinner, Textarea,
};
use crate::api::ApiErrorKind;
use crate::identity::register_user_once;
use crate::models::EntryDraft;
use crate::state::AppContext;
use crate::util::{filter_entries_by_day, local_tz_offset_minutes};
use icons::X;
use leptos::ev;
use leptos::html;
use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dom::helpers::window_event_listener;
use wasm_bindgen::JsCast;

#[component]
pub fn SignedOutPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex min-h-screen w-full max-w-sm flex-col justify-center px-4 py-10">
                <Card>
                    <CardHeader>
                        <CardTitle class="text-lg">"Memory Threads"</CardTitle>
                        <CardDescription class="text-xs">
                            "A timeline for the moments you want to keep."
                        </CardDescription>
                    </CardHeader>
                    <CardContent>
                        <p class="text-sm text-muted-foreground">
                            "Sign in through your account to see your memories. "
                            "This page picks your session up automatically once you are signed in."
                        </p>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let entries = app_state.0.entries;
    let entries_loading = app_state.0.entries_loading;
    let entries_error = app_state.0.entries_error;
    let selected_day = app_state.0.selected_day;
    let dialog = app_state.0.dialog;

    // Entry form fields. Prefilled on edit, cleared on create.
    let field_title: RwSignal<String> = RwSignal::new(String::new());
    let field_content: RwSignal<String> = RwSignal::new(String::new());
    let field_link: RwSignal<String> = RwSignal::new(String::new());
    let field_image: RwSignal<String> = RwSignal::new(String::new());

    let submit_loading: RwSignal<bool> = RwSignal::new(false);
    let delete_loading: RwSignal<bool> = RwSignal::new(false);

    let title_ref: NodeRef<html::Input> = NodeRef::new();

    let load_entries = move || {
        let api_client = app_state.0.api_client.get_untracked();

        // Every load gets a fresh id; only the newest response is applied,
        // so a slow stale fetch can never overwrite a newer one.
        let my_id = app_state.0.entries_request_id.get_untracked().wrapping_add(1);
        app_state.0.entries_request_id.set(my_id);

        entries_loading.set(true);
        entries_error.set(None);

        spawn_local(async move {
            let result = api_client.list_entries().await;

            if app_state.0.entries_request_id.get_untracked() != my_id {
                return;
            }

            match result {
                Ok(list) => {
                    entries.set(list);
                }
                Err(e) => {
                    let msg = if e.kind == ApiErrorKind::Unauthorized {
                        "Your session has expired. Sign in again to continue.".to_string()
                    } else {
                        e.to_string()
                    };
                    entries_error.set(Some(msg));
                }
            }
            entries_loading.set(false);
        });
    };

    // Mirror the provider profile once per session (idempotent upsert).
    Effect::new(move |_| {
        if app_state.0.current_user.get().is_some() {
            register_user_once(app_state);
        }
    });

    // Initial load, plus a reload whenever a mutation invalidates the list.
    // IMPORTANT: track only the revision; tracking `entries_loading` or
    // `entries` here would retrigger loads in a tight loop.
    Effect::new(move |_| {
        let _rev = app_state.0.entries_revision.get();
        load_entries();
    });

    let on_toggle_form = move || {
        let next = dialog.get_untracked().toggle_form();
        if matches!(next, crate::state::EntryDialog::Create) {
            field_title.set(String::new());
            field_content.set(String::new());
            field_link.set(String::new());
            field_image.set(String::new());
        }
        dialog.set(next);
    };

    let on_open_edit = move |entry: crate::models::JournalEntry| {
        let draft = EntryDraft::from_entry(&entry);
        field_title.set(draft.title);
        field_content.set(draft.content);
        field_link.set(draft.special_link);
        field_image.set(draft.image);
        dialog.set(dialog.get_untracked().open_edit(entry));
    };

    let on_request_delete = move |id: String| {
        dialog.set(dialog.get_untracked().request_delete(id));
    };

    let on_submit_entry = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if submit_loading.get_untracked() {
            return;
        }

        let draft = EntryDraft {
            title: field_title.get_untracked(),
            content: field_content.get_untracked(),
            special_link: field_link.get_untracked(),
            image: field_image.get_untracked(),
        };

        let target = dialog
            .get_untracked()
            .submit_target()
            .map(str::to_string);
        let api_client = app_state.0.api_client.get_untracked();

        submit_loading.set(true);

        spawn_local(async move {
            let result = match &target {
                Some(id) => api_client.update_entry(id, &draft).await.map(|_| ()),
                None => api_client.create_entry(&draft).await.map(|_| ()),
            };

            match result {
                Ok(()) => {
                    dialog.set(dialog.get_untracked().close());
                    app_state.0.invalidate_entries();
                }
                Err(e) => {
                    // The form stays open with its values; nothing reloads.
                    logging::error!("memory submit failed: {e}");
                }
            }
            submit_loading.set(false);
        });
    };

    let on_confirm_delete = move |_: web_sys::MouseEvent| {
        if delete_loading.get_untracked() {
            return;
        }

        let Some(id) = dialog.get_untracked().delete_target().map(str::to_string) else {
            return;
        };

        let api_client = app_state.0.api_client.get_untracked();
        delete_loading.set(true);

        spawn_local(async move {
            match api_client.delete_entry(&id).await {
                Ok(()) => {
                    dialog.set(dialog.get_untracked().close());
                    app_state.0.invalidate_entries();
                }
                Err(e) => {
                    logging::error!("memory delete failed: {e}");
                }
            }
            delete_loading.set(false);
        });
    };

    let on_cancel_delete = move |_: web_sys::MouseEvent| {
        if delete_loading.get_untracked() {
            return;
        }
        dialog.set(dialog.get_untracked().close());
    };

    // Escape closes whichever popup is up, unless a request is in flight.
    let _key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Escape" {
            return;
        }
        if submit_loading.get_untracked() || delete_loading.get_untracked() {
            return;
        }
        dialog.set(dialog.get_untracked().close());
    });

    // Focus the title input when the form opens.
    Effect::new(move |_| {
        if !dialog.get().form_open() {
            return;
        }

        // Defer to next tick so the Input is mounted.
        let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
            wasm_bindgen::closure::Closure::once_into_js(move || {
                if let Some(el) = title_ref.get_untracked() {
                    let _ = el.focus();
                }
            })
            .as_ref()
            .unchecked_ref(),
            0,
        );
    });

    let is_editing = move || dialog.get().submit_target().is_some();
    let form_open = move || dialog.get().form_open();
    let delete_open = move || dialog.get().delete_target().is_some();

    let greeting = move || {
        app_state
            .0
            .current_user
            .get()
            .and_then(|u| u.display_name())
            .map(|name| format!("Welcome back, {name}."))
            .unwrap_or_else(|| "Welcome back.".to_string())
    };

    let filtered_entries = move || {
        filter_entries_by_day(
            &entries.get(),
            &selected_day.get(),
            local_tz_offset_minutes(),
        )
    };

    view! {
        <div class="min-h-screen bg-background text-foreground">
            <div class="mx-auto w-full max-w-[1080px] px-4 py-8">
                <header class="mb-6 flex items-center justify-between gap-3">
                    <div class="space-y-1">
                        <h1 class="text-xl font-semibold">"Timeline of Moments"</h1>
                        <p class="text-xs text-muted-foreground">{greeting}</p>
                    </div>

                    <div class="flex items-center gap-2">
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Icon
                            on:click=move |_| app_state.0.invalidate_entries()
                            attr:title="Refresh"
                            class="h-8 w-8"
                        >
                            <span class="text-xs text-muted-foreground">"↻"</span>
                        </Button>

                        <Button size=ButtonSize::Sm on:click=move |_| on_toggle_form()>
                            "Create memory"
                        </Button>
                    </div>
                </header>

                <div class="mb-4 flex items-center gap-2">
                    <Label html_for="day_filter" class="text-xs">"Show a single day"</Label>
                    <Input
                        id="day_filter"
                        r#type="date"
                        bind_value=selected_day
                        class="h-8 w-44 text-sm"
                    />
                    <Show when=move || !selected_day.get().is_empty() fallback=|| ().into_view()>
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            on:click=move |_| selected_day.set(String::new())
                        >
                            "Clear"
                        </Button>
                    </Show>
                </div>

                <Show when=move || entries_error.get().is_some() fallback=|| ().into_view()>
                    {move || {
                        entries_error.get().map(|e| view! {
                            <Alert class="mb-4 border-destructive/30">
                                <AlertDescription class="text-destructive text-xs">
                                    {format!("Could not load memories: {e}")}
                                </AlertDescription>
                            </Alert>
                        })
                    }}
                </Show>

                <Show
                    when=move || !filtered_entries().is_empty()
                    fallback=move || view! {
                        <div class="py-8 text-sm text-muted-foreground">
                            {move || {
                                if entries_loading.get() {
                                    "Loading memories..."
                                } else if !entries.get().is_empty() {
                                    "No memories on this day."
                                } else {
                                    "No memories yet. Create the first one."
                                }
                            }}
                        </div>
                    }
                >
                    <section class="grid gap-3 sm:grid-cols-2">
                        {move || {
                            filtered_entries()
                                .into_iter()
                                .map(|entry| view! {
                                    <EntryCard
                                        entry=entry
                                        on_edit=Callback::new(on_open_edit)
                                        on_delete=Callback::new(on_request_delete)
                                    />
                                })
                                .collect_view()
                        }}
                    </section>
                </Show>

                <Show when=form_open fallback=|| ().into_view()>
                    <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/30 px-4">
                        <div class="w-full max-w-md rounded-md border border-border bg-background p-4 shadow-lg">
                            <div class="mb-3 flex items-start justify-between">
                                <div class="space-y-1">
                                    <div class="text-sm font-medium">
                                        {move || if is_editing() { "Edit memory" } else { "New memory" }}
                                    </div>
                                </div>

                                <Button
                                    variant=ButtonVariant::Ghost
                                    size=ButtonSize::Icon
                                    class="h-7 w-7"
                                    attr:title="Close"
                                    attr:disabled=move || submit_loading.get()
                                    on:click=move |_| on_toggle_form()
                                >
                                    <X />
                                </Button>
                            </div>

                            <form class="flex flex-col gap-3" on:submit=on_submit_entry>
                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="memory_title" class="text-xs">
                                        "Summarize today in a few words"
                                    </Label>
                                    <Input
                                        id="memory_title"
                                        node_ref=title_ref
                                        bind_value=field_title
                                        class="h-8 text-sm"
                                    />
                                </div>

                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="memory_content" class="text-xs">
                                        "What memory do you want to preserve from today?"
                                    </Label>
                                    <Textarea
                                        id="memory_content"
                                        bind_value=field_content
                                        class="text-sm"
                                    />
                                </div>

                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="memory_link" class="text-xs">
                                        "Share a special piece of media from today"
                                    </Label>
                                    <Input
                                        id="memory_link"
                                        bind_value=field_link
                                        placeholder="https://..."
                                        class="h-8 text-sm"
                                    />
                                </div>

                                <div class="flex flex-col gap-1.5">
                                    <Label html_for="memory_image" class="text-xs">
                                        "Attach a photo you want to remember (URL)"
                                    </Label>
                                    <Input
                                        id="memory_image"
                                        bind_value=field_image
                                        placeholder="https://..."
                                        class="h-8 text-sm"
                                    />
                                </div>

                                <div class="flex items-center justify-end gap-2 pt-1">
                                    <Button
                                        size=ButtonSize::Sm
                                        attr:disabled=move || submit_loading.get()
                                    >
                                        <span class="inline-flex items-center gap-2">
                                            <Show when=move || submit_loading.get() fallback=|| ().into_view()>
                                                <Spinner />
                                            </Show>
                                            {move || {
                                                if submit_loading.get() {
                                                    "Saving..."
                                                } else if is_editing() {
                                                    "Update"
                                                } else {
                                                    "Submit"
                                                }
                                            }}
                                        </span>
                                    </Button>
                                </div>
                            </form>
                        </div>
                    </div>
                </Show>

                <Show when=delete_open fallback=|| ().into_view()>
                    <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/30 px-4">
                        <div class="w-full max-w-sm rounded-md border border-border bg-background p-4 shadow-lg">
                            <div class="mb-3 space-y-1">
                                <div class="text-sm font-medium text-destructive">"Delete memory"</div>
                                <div class="text-xs text-muted-foreground">
                                    "Are you sure you want to delete this memory?"
                                </div>
                            </div>

                            <div class="flex items-center justify-end gap-2">
                                <Button
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    attr:disabled=move || delete_loading.get()
                                    on:click=on_cancel_delete
                                >
                                    "No"
                                </Button>
                                <Button
                                    variant=ButtonVariant::Destructive
                                    size=ButtonSize::Sm
                                    attr:disabled=move || delete_loading.get()
                                    on:click=on_confirm_delete
                                >
                                    <span class="inline-flex items-center gap-2">
                                        <Show when=move || delete_loading.get() fallback=|| ().into_view()>
                                            <Spinner />
                                        </Show>
                                        {move || if delete_loading.get() { "Deleting..." } else { "Yes" }}
                                    </span>
                                </Button>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn RootPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let is_signed_in = move || app_state.0.current_user.get().is_some();

    view! {
        <Show when=is_signed_in fallback=move || view! { <SignedOutPage /> }>
            <DashboardPage />
        </Show>
    }
}
