//! Terminal output formatting: status lines, the dry-run banner, and the
//! file-tree rendering of a scaffold result. Purely presentational.

use colored::Colorize;

pub fn success_message(message: &str) -> String {
    format!("  {} {}", "✔".green(), message)
}

pub fn error_message(message: &str) -> String {
    format!("  {} {}", "✖".red(), message)
}

pub fn info_message(message: &str) -> String {
    format!("  {} {}", "ℹ".cyan(), message)
}

pub fn dry_run_banner() -> String {
    format!("\n  {}\n", "⚠ DRY RUN — no files will be created".yellow().bold())
}

pub fn done_message(project_name: &str, output_dir: &str) -> String {
    format!(
        "\n{} Created {} in {}\n",
        "  Done!".green().bold(),
        project_name.bold(),
        output_dir.dimmed()
    )
}

struct TreeNode {
    name: String,
    children: Vec<TreeNode>,
    is_file: bool,
}

fn build_tree(paths: &[String]) -> Vec<TreeNode> {
    let mut root: Vec<TreeNode> = Vec::new();

    for path in paths {
        let parts: Vec<&str> = path.split('/').collect();
        let mut current = &mut root;

        for (i, part) in parts.iter().enumerate() {
            let is_file = i == parts.len() - 1;
            let position = match current.iter().position(|node| node.name == *part) {
                Some(position) => position,
                None => {
                    current.push(TreeNode {
                        name: part.to_string(),
                        children: Vec::new(),
                        is_file,
                    });
                    current.len() - 1
                }
            };
            current = &mut current[position].children;
        }
    }

    root
}

fn render_tree(nodes: &[TreeNode], prefix: &str, lines: &mut Vec<String>, is_root: bool) {
    let mut sorted: Vec<&TreeNode> = nodes.iter().collect();
    sorted.sort_by(|a, b| a.is_file.cmp(&b.is_file).then_with(|| a.name.cmp(&b.name)));

    for (i, node) in sorted.iter().enumerate() {
        let is_last = i == sorted.len() - 1;
        let connector = if is_root {
            ""
        } else if is_last {
            "└── "
        } else {
            "├── "
        };
        let child_prefix = if is_root {
            "  ".to_string()
        } else {
            format!("{}{}", prefix, if is_last { "    " } else { "│   " })
        };

        let display_name = if node.is_file {
            node.name.normal().to_string()
        } else {
            format!("{}/", node.name).blue().to_string()
        };

        lines.push(format!("{prefix}{connector}{display_name}"));

        if !node.children.is_empty() {
            render_tree(&node.children, &child_prefix, lines, false);
        }
    }
}

/// Renders created file paths as an indented tree, directories first, each
/// level sorted by name.
pub fn format_file_tree(files: &[String], root_name: &str) -> String {
    let mut sorted = files.to_vec();
    sorted.sort();

    let mut lines = vec![format!("{}/", root_name).cyan().bold().to_string()];
    let tree = build_tree(&sorted);
    render_tree(&tree, "", &mut lines, true);

    lines.join("\n")
}
