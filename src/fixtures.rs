//! Sample trees for unit tests
//!
//! Builds small collections without going through the document parser.

use crate::domain::{KeyValue, NodeId, RequestData, ResourceTree};

/// Handles of the nodes in [`single_branch`]
#[derive(Debug, Clone, Copy)]
pub struct BranchIds {
    pub folder: NodeId,
    pub request: NodeId,
    pub example: NodeId,
}

/// `Collection{Folder"f1"{Request"r1"{Example"e1"}}}`
pub fn single_branch() -> (ResourceTree, BranchIds) {
    let mut tree = ResourceTree::new("root").unwrap();
    let folder = tree.add_folder(tree.root(), "f1").unwrap();
    let request = tree
        .add_request(folder, "r1", RequestData::new("GET", "{{host}}/r1"))
        .unwrap();
    let example = tree.add_example(request, "e1", None).unwrap();

    (
        tree,
        BranchIds {
            folder,
            request,
            example,
        },
    )
}

/// A small but realistic API collection:
///
/// ```text
/// F Users
///     R List Users
///     R Get User
///         E OK
///         E Not Found
/// F Auth
///     F Tokens
///         R Refresh
/// R Health
/// ```
pub fn sample_api() -> ResourceTree {
    let mut tree = ResourceTree::new("Sample API").unwrap();
    let root = tree.root();
    tree.set_variables(vec![KeyValue::new("baseUrl", "https://api.example.com")]);

    let users = tree.add_folder(root, "Users").unwrap();
    tree.add_request(
        users,
        "List Users",
        RequestData::new("GET", "{{baseUrl}}/users?page=1&limit=20")
            .with_header("Accept", "application/json"),
    )
    .unwrap();

    let get_user = tree
        .add_request(
            users,
            "Get User",
            RequestData::new("GET", "{{baseUrl}}/users/:id")
                .with_path_variable("id", "42")
                .with_header("Accept", "application/json"),
        )
        .unwrap();
    tree.add_example(
        get_user,
        "OK",
        Some(RequestData::new("GET", "{{baseUrl}}/users/:id").with_path_variable("id", "7")),
    )
    .unwrap();
    tree.add_example(get_user, "Not Found", None).unwrap();

    let auth = tree.add_folder(root, "Auth").unwrap();
    let tokens = tree.add_folder(auth, "Tokens").unwrap();
    tree.add_request(
        tokens,
        "Refresh",
        RequestData::new("POST", "{{baseUrl}}/auth/refresh")
            .with_header("Content-Type", "application/json")
            .with_raw_body(r#"{"refresh_token":"{{refreshToken}}"}"#),
    )
    .unwrap();

    tree.add_request(root, "Health", RequestData::new("GET", "{{baseUrl}}/health"))
        .unwrap();

    tree
}
