//! Table definitions for the local catalog.
//!
//! Each table keeps the columns imported from the catalog CSV dumps, the
//! upstream-owned columns a sync overwrites, and locally owned counters
//! that a sync never touches.

pub(crate) const CREATE_TABLES: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS sets (
        set_num TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL DEFAULT '',
        year INTEGER,
        theme_id INTEGER,
        num_parts INTEGER,
        img_url TEXT,
        set_url TEXT,
        set_img_url TEXT,
        last_modified_dt TEXT,
        num_owned INTEGER NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS colors (
        id INTEGER PRIMARY KEY NOT NULL,
        name TEXT NOT NULL DEFAULT '',
        rgb TEXT,
        is_trans INTEGER,
        bricklink_id INTEGER,
        brickowl_id INTEGER,
        lego_id INTEGER,
        num_owned INTEGER NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS minifigs (
        fig_num TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL DEFAULT '',
        num_parts INTEGER,
        img_url TEXT,
        fig_url TEXT,
        fig_img_url TEXT,
        last_modified_dt TEXT,
        num_owned INTEGER NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS parts (
        part_num TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL DEFAULT '',
        part_cat_id INTEGER,
        part_material TEXT,
        part_url TEXT,
        part_img_url TEXT,
        bricklink_id TEXT,
        brickowl_id TEXT,
        print_of TEXT,
        num_owned INTEGER NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS part_categories (
        id INTEGER PRIMARY KEY NOT NULL,
        name TEXT NOT NULL DEFAULT '',
        part_count INTEGER,
        num_owned INTEGER NOT NULL DEFAULT 0
    )",
];

pub(crate) const DROP_TABLES: &[&str] = &[
    "DROP TABLE IF EXISTS sets",
    "DROP TABLE IF EXISTS colors",
    "DROP TABLE IF EXISTS minifigs",
    "DROP TABLE IF EXISTS parts",
    "DROP TABLE IF EXISTS part_categories",
];
