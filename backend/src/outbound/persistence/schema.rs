//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; `diesel
//! print-schema` can regenerate them from a live database after a
//! migration change.

diesel::table! {
    /// Task board workspaces.
    boards (id) {
        /// Primary key (UUID v4).
        id -> Uuid,
        /// Display name.
        name -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Owning company reference; companies live in another system.
        company_id -> Uuid,
        /// Creating user.
        created_by -> Uuid,
        /// Soft-archive flag.
        is_archived -> Bool,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Labels defined per board.
    labels (id) {
        /// Primary key (UUID v4).
        id -> Uuid,
        /// Owning board.
        board_id -> Uuid,
        /// Display name.
        name -> Varchar,
        /// Display colour token.
        color -> Varchar,
    }
}

diesel::table! {
    /// Ordered columns within a board.
    lists (id) {
        /// Primary key (UUID v4).
        id -> Uuid,
        /// Owning board.
        board_id -> Uuid,
        /// Display name.
        name -> Varchar,
        /// Zero-based order among the board's lists.
        position -> Int4,
        /// Soft-archive flag.
        is_archived -> Bool,
    }
}

diesel::table! {
    /// Task cards within a list.
    cards (id) {
        /// Primary key (UUID v4).
        id -> Uuid,
        /// Owning list.
        list_id -> Uuid,
        /// Display title.
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Zero-based order among the list's cards.
        position -> Int4,
        /// Soft-archive flag.
        is_archived -> Bool,
        /// Creating user.
        created_by -> Uuid,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Card-to-label join rows.
    card_labels (card_id, label_id) {
        /// Linked card.
        card_id -> Uuid,
        /// Linked label.
        label_id -> Uuid,
    }
}

diesel::table! {
    /// Card-to-user assignment join rows.
    card_assignments (card_id, user_id) {
        /// Assigned card.
        card_id -> Uuid,
        /// Assigned user; identities live behind the auth boundary.
        user_id -> Uuid,
    }
}

diesel::table! {
    /// Discussion entries on cards.
    comments (id) {
        /// Primary key (UUID v4).
        id -> Uuid,
        /// Owning card.
        card_id -> Uuid,
        /// Authoring user.
        author_id -> Uuid,
        /// Comment text.
        body -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Checklist groups on cards.
    checklists (id) {
        /// Primary key (UUID v4).
        id -> Uuid,
        /// Owning card.
        card_id -> Uuid,
        /// Display title.
        title -> Varchar,
        /// Zero-based order among the card's checklists.
        position -> Int4,
    }
}

diesel::table! {
    /// Tickable entries of a checklist.
    checklist_items (id) {
        /// Primary key (UUID v4).
        id -> Uuid,
        /// Owning checklist.
        checklist_id -> Uuid,
        /// Display title.
        title -> Varchar,
        /// Completion flag.
        is_done -> Bool,
        /// Zero-based order among the checklist's items.
        position -> Int4,
    }
}

diesel::table! {
    /// File metadata attached to cards; bytes live in external storage.
    attachments (id) {
        /// Primary key (UUID v4).
        id -> Uuid,
        /// Owning card.
        card_id -> Uuid,
        /// Storage-assigned file name.
        file_name -> Varchar,
        /// File name as uploaded.
        original_name -> Varchar,
        /// MIME type reported at upload time.
        mime_type -> Varchar,
        /// Size in bytes.
        byte_size -> Int8,
        /// Storage URL for download.
        url -> Text,
        /// Uploading user.
        uploaded_by -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(labels -> boards (board_id));
diesel::joinable!(lists -> boards (board_id));
diesel::joinable!(cards -> lists (list_id));
diesel::joinable!(card_labels -> cards (card_id));
diesel::joinable!(card_labels -> labels (label_id));
diesel::joinable!(card_assignments -> cards (card_id));
diesel::joinable!(comments -> cards (card_id));
diesel::joinable!(checklists -> cards (card_id));
diesel::joinable!(checklist_items -> checklists (checklist_id));
diesel::joinable!(attachments -> cards (card_id));

diesel::allow_tables_to_appear_in_same_query!(
    boards,
    labels,
    lists,
    cards,
    card_labels,
    card_assignments,
    comments,
    checklists,
    checklist_items,
    attachments,
);
