use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle,
};
use crate::config::image_url_allowed;
use crate::models::JournalEntry;
use crate::util::{local_day, local_tz_offset_minutes};
use leptos::prelude::*;

/// One journal entry, with its edit/delete affordances.
///
/// The image is rendered only when its source passes the remote-image
/// allowlist; a disallowed or empty URL is silently skipped.
#[component]
pub fn EntryCard(
    entry: JournalEntry,
    on_edit: Callback<JournalEntry>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let day_label =
        local_day(&entry.date_created, local_tz_offset_minutes()).unwrap_or_default();

    let image_src = entry
        .image
        .clone()
        .filter(|src| image_url_allowed(src));

    let special_link = entry
        .special_link
        .clone()
        .filter(|l| !l.trim().is_empty());

    let entry_for_edit = entry.clone();
    let id_for_delete = entry.id.clone();

    let title_for_header = entry.title.clone();
    let title_for_alt = entry.title.clone();
    let content = entry.content.clone();

    view! {
        <Card class="group relative transition-colors hover:bg-surface-hover hover:ring-1 hover:ring-border">
            <CardHeader class="p-4 pb-0">
                <CardTitle class="truncate text-sm">{title_for_header}</CardTitle>
                <CardDescription class="text-xs">{day_label}</CardDescription>
            </CardHeader>

            <CardContent class="p-4 pt-2">
                <p class="whitespace-pre-wrap text-sm text-foreground">{content}</p>

                {image_src.map(|src| view! {
                    <img
                        src=src
                        alt=title_for_alt
                        class="mt-3 max-h-64 w-full rounded-md border border-border object-cover"
                        loading="lazy"
                    />
                })}

                {special_link.map(|link| view! {
                    <a
                        href=link.clone()
                        target="_blank"
                        rel="noreferrer"
                        class="mt-2 block truncate text-xs text-primary underline underline-offset-4"
                    >
                        {link.clone()}
                    </a>
                })}
            </CardContent>

            <CardFooter class="justify-end p-4 pt-0">
                <div class="hidden items-center gap-1 group-hover:flex">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        class="h-7 w-7"
                        attr:title="Edit"
                        on:click=move |_| on_edit.run(entry_for_edit.clone())
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="16"
                            height="16"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            class="text-muted-foreground"
                            aria-hidden="true"
                        >
                            <path d="M12 20h9" />
                            <path d="M16.5 3.5a2.121 2.121 0 0 1 3 3L7 19l-4 1 1-4Z" />
                        </svg>
                    </Button>

                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        class="h-7 w-7 text-destructive"
                        attr:title="Delete"
                        on:click=move |_| on_delete.run(id_for_delete.clone())
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="16"
                            height="16"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            aria-hidden="true"
                        >
                            <path d="M3 6h18" />
                            <path d="M8 6V4h8v2" />
                            <path d="M19 6l-1 14H6L5 6" />
                            <path d="M10 11v6" />
                            <path d="M14 11v6" />
                        </svg>
                    </Button>
                </div>
            </CardFooter>
        </Card>
    }
}
