use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_scrollload::{watch_sentinel, PageCursor};

use crate::api;
use crate::models::User;

/// How far outside the viewport (in px) the sentinel may be when the next
/// page load is triggered
const SENTINEL_MARGIN_PX: i32 = 20;
/// Fraction of the sentinel that must be visible (1.0 = fully visible)
const SENTINEL_THRESHOLD: f64 = 1.0;

/// Merge a fetched page into the accumulated list.
/// Page 1 replaces the list; later pages append.
fn apply_page(list: &mut Vec<User>, page_num: u32, data: Vec<User>) {
    if page_num == 1 {
        *list = data;
    } else {
        list.extend(data);
    }
}

/// Infinitely-scrolling user list.
///
/// `is_loading` is the gate from the page shell: while true (splash still
/// showing) the component renders nothing and issues no requests. Once the
/// gate opens it fetches page 1, then loads further pages whenever the
/// sentinel div at the end of the list scrolls into view.
#[component]
pub fn UserList(is_loading: ReadSignal<bool>) -> impl IntoView {
    let (users, set_users) = signal(Vec::<User>::new());
    let cursor = RwSignal::new(PageCursor::new());
    let sentinel_ref = NodeRef::<Div>::new();

    let load_page = move |page_num: u32| {
        spawn_local(async move {
            match api::fetch_users_page(page_num).await {
                Ok(page) => {
                    let accepted = cursor
                        .try_update(|c| c.complete(page.page, page.total_pages))
                        .unwrap_or(false);
                    if accepted {
                        web_sys::console::log_1(
                            &format!(
                                "[UserList] Loaded page {} with {} users",
                                page.page,
                                page.data.len()
                            )
                            .into(),
                        );
                        set_users.update(|list| apply_page(list, page_num, page.data));
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[UserList] Error fetching page {}: {}", page_num, e).into(),
                    );
                    cursor.try_update(|c| c.fail());
                }
            }
        });
    };

    // Kick off page 1 once the splash gate releases
    Effect::new(move |_| {
        if is_loading.get() {
            return;
        }
        if let Some(first) = cursor.try_update(|c| c.start()).flatten() {
            load_page(first);
        }
    });

    // Re-observe whenever a fetch settles: a short page can leave the
    // sentinel fully visible with no scrollbar, and only a fresh observe()
    // delivers another intersection record to chain the next load
    let fetching = Signal::derive(move || cursor.with(|c| c.is_fetching()));
    watch_sentinel(
        sentinel_ref,
        SENTINEL_MARGIN_PX,
        SENTINEL_THRESHOLD,
        fetching,
        move || {
            if is_loading.get_untracked() {
                return;
            }
            if let Some(next) = cursor.try_update(|c| c.advance()).flatten() {
                load_page(next);
            }
        },
    );

    view! {
        <Show when=move || !is_loading.get()>
            <div class="user-list">
                <For
                    each=move || users.get()
                    key=|user| user.id
                    children=move |user| {
                        let full_name = format!("{} {}", user.first_name, user.last_name);
                        view! {
                            <div class="user-card">
                                <img src=user.avatar.clone() alt=full_name.clone()/>
                                <div class="user-info">
                                    <h3>{full_name}</h3>
                                    <p>{user.email.clone()}</p>
                                </div>
                            </div>
                        }
                    }
                />

                // Sentinel for the intersection observer
                <div class="loading-trigger" node_ref=sentinel_ref>
                    <Show when=move || cursor.with(|c| c.is_fetching())>
                        <p>"Loading more..."</p>
                    </Show>
                    <Show when=move || cursor.with(|c| !c.has_more())>
                        <p>"No more users to load"</p>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(id: u32) -> User {
        User {
            id,
            email: format!("user{}@example.com", id),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            avatar: format!("https://reqres.in/img/faces/{}-image.jpg", id),
        }
    }

    fn ids(list: &[User]) -> Vec<u32> {
        list.iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_page_one_replaces_existing_items() {
        let mut list = vec![make_user(9)];
        apply_page(&mut list, 1, vec![make_user(1), make_user(2)]);
        assert_eq!(ids(&list), vec![1, 2]);
    }

    #[test]
    fn test_later_pages_append() {
        let mut list = vec![make_user(1), make_user(2)];
        apply_page(&mut list, 2, vec![make_user(3)]);
        assert_eq!(ids(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_full_scroll_scenario() {
        let mut cursor = PageCursor::new();
        let mut list = Vec::new();

        // Gate opens: page 1 of 2 arrives with two users
        assert_eq!(cursor.start(), Some(1));
        assert!(cursor.complete(1, 2));
        apply_page(&mut list, 1, vec![make_user(1), make_user(2)]);
        assert_eq!(ids(&list), vec![1, 2]);
        assert!(cursor.has_more());
        assert!(!cursor.is_fetching());

        // Sentinel fires: page 2 of 2 arrives with one user
        assert_eq!(cursor.advance(), Some(2));
        assert!(cursor.complete(2, 2));
        apply_page(&mut list, 2, vec![make_user(3)]);
        assert_eq!(ids(&list), vec![1, 2, 3]);
        assert!(!cursor.has_more());

        // Further sentinel events load nothing and drop nothing
        assert_eq!(cursor.advance(), None);
        assert_eq!(ids(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_visible_sentinel_chains_short_pages_without_scrolling() {
        // Pages too short to fill the viewport: the sentinel never leaves
        // view, so every trigger comes from the re-delivered intersection
        // record after a fetch settles
        let mut cursor = PageCursor::new();
        let mut list = Vec::new();

        assert_eq!(cursor.start(), Some(1));
        // Record delivered while page 1 is still in flight is a no-op
        assert_eq!(cursor.advance(), None);

        assert!(cursor.complete(1, 3));
        apply_page(&mut list, 1, vec![make_user(1), make_user(2)]);
        // Fetch settled -> re-observe -> record re-delivered
        assert_eq!(cursor.advance(), Some(2));

        assert!(cursor.complete(2, 3));
        apply_page(&mut list, 2, vec![make_user(3)]);
        assert_eq!(cursor.advance(), Some(3));

        assert!(cursor.complete(3, 3));
        apply_page(&mut list, 3, vec![make_user(4)]);
        assert_eq!(ids(&list), vec![1, 2, 3, 4]);

        // Exhausted: re-delivered records stop chaining
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn test_failed_first_fetch_leaves_list_empty_and_retriable() {
        let mut cursor = PageCursor::new();
        let mut list = Vec::<User>::new();

        assert_eq!(cursor.start(), Some(1));
        cursor.fail();
        assert!(list.is_empty());
        assert!(!cursor.is_fetching());

        // A later sentinel event retries page 1 and succeeds
        assert_eq!(cursor.advance(), Some(1));
        assert!(cursor.complete(1, 1));
        apply_page(&mut list, 1, vec![make_user(1)]);
        assert_eq!(ids(&list), vec![1]);
    }
}
