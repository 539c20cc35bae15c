//! Fragment views.
//!
//! Pure `render(state) -> String` functions, one per UI region. Nothing here
//! touches the store or the request; handlers pass in values and splice the
//! returned markup into the response body. That keeps every view unit-testable
//! without an HTTP layer.
//!
//! The htmx attributes embedded in each fragment are the hypermedia contract:
//! they name the route a control fires and where the returned fragment lands
//! (`hx-target` / `hx-swap`).

use hypertodo_core::Todo;

/// Escapes text for interpolation into HTML content or attribute values.
///
/// This is output encoding, not input sanitization: content is stored as
/// submitted and encoded at the rendering boundary.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders one todo row.
///
/// The checkbox posts to the toggle route and the button fires the delete
/// route; both swap the enclosing row (`closest div`) with whatever the
/// server returns, so a toggle re-renders the row and a delete (empty body)
/// removes it.
#[must_use]
pub fn todo_item(todo: &Todo) -> String {
    let checked = if todo.completed { " checked" } else { "" };
    format!(
        concat!(
            "<div class=\"flex flex-row space-x-3 px-4 py-2\">",
            "<input type=\"checkbox\"{checked} ",
            "hx-post=\"/todos/toggle/{id}\" ",
            "hx-target=\"closest div\" hx-swap=\"outerHTML\"/>",
            "<p>{content}</p>",
            "<button class=\"text-red-500\" ",
            "hx-delete=\"/todos/{id}\" ",
            "hx-target=\"closest div\" hx-swap=\"outerHTML\">x</button>",
            "</div>"
        ),
        checked = checked,
        id = todo.id,
        content = escape(&todo.content),
    )
}

/// Renders the full todo-list fragment: every row in insertion order,
/// followed by the entry form.
#[must_use]
pub fn todo_list(todos: &[Todo]) -> String {
    let mut out = String::from(
        "<div class=\"px-8 py-4 mt-4 rounded-lg bg-green-950 border-2 border-green-400\">",
    );
    for todo in todos {
        out.push_str(&todo_item(todo));
    }
    out.push_str(&todo_form());
    out.push_str("</div>");
    out
}

/// The entry form at the bottom of the list.
///
/// New items land before the form (`hx-swap="beforebegin"`), and the
/// hyperscript handler clears the input after a successful submit.
fn todo_form() -> String {
    concat!(
        "<form class=\"flex space-x-3\" hx-post=\"/todos\" ",
        "hx-swap=\"beforebegin\" _=\"on submit target.reset()\">",
        "<input type=\"text\" name=\"content\" ",
        "class=\"border border-slate-800 rounded-lg bg-slate-800\"/>",
        "<button type=\"submit\" ",
        "class=\"rounded-lg py-1 px-2 border border-teal-100 bg-green-200\">add</button>",
        "</form>"
    )
    .to_string()
}

/// The landing fragment served inside the page shell at `/`.
#[must_use]
pub fn click_me() -> String {
    concat!(
        "<div class=\"h-screen flex justify-center items-center bg-slate-800\">",
        "<div class=\"flex flex-col items-center\">",
        "<h1 class=\"text-3xl text-white\">Hello, World!!</h1>",
        "<button class=\"border-1 bg-slate-200 rounded-md py-2 px-1\" ",
        "hx-post=\"/clicked\" hx-trigger=\"click\" hx-swap=\"outerHTML\">",
        "Click me!</button>",
        "</div></div>"
    )
    .to_string()
}

/// The fragment returned by `POST /clicked`: a greeting plus the button that
/// pulls in the todo list.
#[must_use]
pub fn clicked() -> String {
    concat!(
        "<div class=\"text-teal-400 mt-4 flex flex-col items-center\">",
        "<p>Hey, I'm from server</p>",
        "<button hx-get=\"/todos\" hx-trigger=\"click\" hx-swap=\"outerHTML\" ",
        "class=\"rounded-lg bg-green-950 border-2 border-green-400 px-2 py-1\">",
        "Todo</button>",
        "</div>"
    )
    .to_string()
}

/// Wraps a fragment in the static document shell.
///
/// The shell pulls in htmx, hyperscript, and tailwind from CDNs; everything
/// after the initial load is fragment swaps.
#[must_use]
pub fn page(body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "  <meta charset=\"UTF-8\">\n",
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
            "  <title>Hypertodo</title>\n",
            "  <script src=\"https://unpkg.com/htmx.org@1.9.5\"></script>\n",
            "  <script src=\"https://unpkg.com/hyperscript.org@0.9.9\"></script>\n",
            "  <script src=\"https://cdn.tailwindcss.com\"></script>\n",
            "</head>\n",
            "<body>\n{body}\n</body>\n",
            "</html>\n"
        ),
        body = body,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code unwraps for clear failure messages
mod tests {
    use super::*;
    use hypertodo_core::TodoId;

    fn todo(id: i64, content: &str, completed: bool) -> Todo {
        Todo {
            id: TodoId::from_i64(id),
            content: content.to_string(),
            completed,
        }
    }

    #[test]
    fn escape_covers_html_metacharacters() {
        assert_eq!(
            escape("<b>\"a\" & 'b'</b>"),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn item_wires_toggle_and_delete_to_its_own_id() {
        let html = todo_item(&todo(7, "buy milk", false));

        assert!(html.contains("hx-post=\"/todos/toggle/7\""));
        assert!(html.contains("hx-delete=\"/todos/7\""));
        assert!(html.contains("hx-target=\"closest div\""));
        assert!(html.contains("<p>buy milk</p>"));
    }

    #[test]
    fn item_checkbox_reflects_completion() {
        let open = todo_item(&todo(1, "open", false));
        let done = todo_item(&todo(2, "done", true));

        assert!(!open.contains("checked"));
        assert!(done.contains("<input type=\"checkbox\" checked"));
    }

    #[test]
    fn item_escapes_content() {
        let html = todo_item(&todo(1, "<script>alert(1)</script>", false));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn list_renders_items_in_order_then_the_form() {
        let todos = vec![todo(1, "first", false), todo(2, "second", true)];
        let html = todo_list(&todos);

        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        let form = html.find("<form").unwrap();
        assert!(first < second);
        assert!(second < form);
        assert!(html.contains("hx-swap=\"beforebegin\""));
        assert!(html.contains("on submit target.reset()"));
    }

    #[test]
    fn empty_list_still_offers_the_form() {
        let html = todo_list(&[]);
        assert!(html.contains("name=\"content\""));
    }

    #[test]
    fn page_wraps_body_in_document_shell() {
        let html = page(&click_me());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("htmx.org"));
        assert!(html.contains("Click me!"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn clicked_fragment_points_at_the_todo_list() {
        let html = clicked();
        assert!(html.contains("hx-get=\"/todos\""));
    }
}
