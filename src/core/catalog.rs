//! # Built-in Catalog
//!
//! The documentation roots Slate links against, in declaration order.

use super::DocLink;

/// Namespaces and documentation roots for the GNOME platform libraries
pub const BUILTIN: [DocLink; 5] = [
    DocLink::borrowed("GLib", "https://docs.gtk.org/glib/"),
    DocLink::borrowed("GObject", "https://docs.gtk.org/gobject/"),
    DocLink::borrowed("Gio", "https://docs.gtk.org/gio/"),
    DocLink::borrowed("Gtk", "https://docs.gtk.org/gtk4/"),
    DocLink::borrowed("Adw", "https://gnome.pages.gitlab.gnome.org/libadwaita/doc/"),
];
