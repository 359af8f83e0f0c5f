//! Built-in tool mappings
//!
//! The default table the generator runs against when no configuration
//! file replaces it.

use crate::mapping::ToolMapping;

/// Number of built-in mappings.
pub const BUILTIN_COUNT: usize = 27;

/// Returns all built-in mappings, grouped by service.
pub fn builtin_mappings() -> Vec<ToolMapping> {
    vec![
        // Entanglements (12 tools)
        ToolMapping::new("list_entanglements", "entanglements", "list", ["args"]),
        ToolMapping::new(
            "get_entanglement",
            "entanglements",
            "get",
            [
                "args.id",
                "args.include_children_qupts",
                "args.detailed ? 50 : 20",
            ],
        ),
        ToolMapping::new(
            "get_child_entanglements",
            "entanglements",
            "getChildren",
            ["args.parent_id", "args.recursive"],
        ),
        ToolMapping::new("create_entanglement", "entanglements", "create", ["args"]),
        ToolMapping::new(
            "update_entanglement",
            "entanglements",
            "update",
            ["args.id", "args"],
        ),
        ToolMapping::new(
            "move_entanglement",
            "entanglements",
            "move",
            ["args.id", "args.new_parent_id"],
        ),
        ToolMapping::new(
            "delete_entanglement",
            "entanglements",
            "delete",
            ["args.id", "args.confirm"],
        ),
        ToolMapping::new(
            "get_matrix",
            "entanglements",
            "getMatrix",
            ["args.entanglement_id"],
        ),
        ToolMapping::new(
            "entangle",
            "entanglements",
            "assignToMatrix",
            ["args.entanglement_id", "args"],
        ),
        ToolMapping::new(
            "disentangle",
            "entanglements",
            "removeFromMatrix",
            ["args.entanglement_id", "args.zoku_id", "args.role"],
        ),
        ToolMapping::new(
            "get_attributes",
            "entanglements",
            "getAttributes",
            ["args.entanglement_id"],
        ),
        ToolMapping::new(
            "list_sources",
            "entanglements",
            "listSources",
            ["args.entanglement_id"],
        ),
        // Zoku (3 tools)
        ToolMapping::new("list_zoku", "zoku", "list", ["args"]),
        ToolMapping::new("create_zoku", "zoku", "create", ["args"]),
        ToolMapping::new("get_entangled", "zoku", "get", ["args.id"]),
        // Qupts (2 tools)
        ToolMapping::new("list_qupts", "qupts", "list", ["args"]),
        ToolMapping::new("create_qupt", "qupts", "create", ["args"]),
        // Jewels (6 tools)
        ToolMapping::new("add_jewel", "jewels", "create", ["args"]),
        ToolMapping::new("list_jewels", "jewels", "list", ["args"]),
        ToolMapping::new("get_jewel", "jewels", "get", ["args.id"]),
        ToolMapping::new("update_jewel", "jewels", "update", ["args.id", "args"]),
        ToolMapping::new("delete_jewel", "jewels", "delete", ["args.id"]),
        ToolMapping::new("get_jewel_usage", "jewels", "getUsage", ["args.id"]),
        // Sources (4 tools)
        ToolMapping::new(
            "add_source",
            "sources",
            "create",
            ["args.entanglement_id", "args"],
        ),
        ToolMapping::new("sync_source", "sources", "sync", ["args.source_id"]),
        ToolMapping::new("remove_source", "sources", "delete", ["args.source_id"]),
        ToolMapping::new(
            "toggle_source",
            "sources",
            "update",
            ["args.source_id", "{ enabled: args.enabled }"],
        ),
    ]
}
