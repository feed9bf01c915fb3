// Event dispatch: applies one user command to the controller, synchronously

use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;

use crate::command::{Command, HELP};
use crate::controller::CatalogController;
use crate::export;
use crate::storage::KeyValueStore;
use crate::view;

// What the terminal should show after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    // Redraw the main screen
    Screen,
    // Print a standalone message, then redraw
    Message(String),
    Quit,
}

pub fn dispatch<S: KeyValueStore>(controller: &mut CatalogController<S>, command: Command) -> Reply {
    tracing::debug!(?command, "Dispatching command");
    match command {
        Command::Search(text) => controller.set_search(text),
        Command::Brand(brand) => controller.set_brand(brand),
        Command::Price { min, max } => controller.set_price_range(min, max),
        Command::MinPrice(min) => controller.set_min_price(min),
        Command::MaxPrice(max) => controller.set_max_price(max),
        Command::Fuel(fuel) => controller.set_fuel_type(fuel),
        Command::Seats(text) => controller.set_seats(&text),
        Command::Sort(sort) => controller.set_sort(sort),
        Command::Reset => controller.reset_filters(),
        Command::Page(page) => {
            controller.go_to_page(page);
        }
        Command::Next => {
            controller.next_page();
        }
        Command::Prev => {
            controller.prev_page();
        }
        Command::Wish(id) => {
            return match controller.toggle_wishlist(id) {
                Ok(true) => Reply::Message(format!("Added car {} to your wishlist", id)),
                Ok(false) => Reply::Message(format!("Removed car {} from your wishlist", id)),
                Err(e) => Reply::Message(e.user_message()),
            };
        }
        Command::Wishlist => return Reply::Message(view::render_wishlist(controller)),
        Command::Show(id) => {
            if let Err(e) = controller.select(id) {
                return Reply::Message(e.user_message());
            }
        }
        Command::Close => controller.close_details(),
        Command::Mode => {
            controller.toggle_view_mode();
        }
        Command::Options => return Reply::Message(view::render_options(controller)),
        Command::Export(path) => {
            let result = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))
                .and_then(|file| export::write_csv(controller.results(), BufWriter::new(file)));
            return match result {
                Ok(rows) => Reply::Message(format!("Exported {} cars to {}", rows, path.display())),
                Err(e) => {
                    tracing::error!("Export failed: {:?}", e);
                    Reply::Message(format!("Export failed: {}", e))
                }
            };
        }
        Command::Help => return Reply::Message(HELP.to_string()),
        Command::Quit => return Reply::Quit,
    }
    Reply::Screen
}
