use keyvault::folder::Folder;
use keyvault::key::Key;

/// How the results are written to stdout
#[derive(Clone, Copy, Debug)]
pub(crate) struct Output {
    json: bool,
}

impl Output {
    pub(crate) fn new(json: bool) -> Self {
        Self { json }
    }

    /// Writes the value as pretty JSON when requested, otherwise calls `text`.
    pub(crate) fn write<T: serde::Serialize>(
        &self,
        value: &T,
        text: impl FnOnce(&T),
    ) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            text(value);
        }
        Ok(())
    }
}

pub(crate) fn folder_line(folder: &Folder, depth: usize) -> String {
    format!(
        "{:indent$}{}  {}  ({} keys, {} folders)",
        "",
        folder.name,
        folder.id,
        folder.count.keys,
        folder.count.folders,
        indent = depth * 2,
    )
}

/// One line per folder, children indented below their parent
pub(crate) fn folder_lines(folders: &[Folder], depth: usize) -> Vec<String> {
    folders.iter().fold(Vec::new(), |mut res, folder| {
        res.push(folder_line(folder, depth));
        res.extend(folder_lines(&folder.children, depth + 1));
        res
    })
}

pub(crate) fn key_lines(keys: &[Key]) -> Vec<String> {
    let name_width = keys
        .iter()
        .map(|key| key.name.chars().count())
        .max()
        .unwrap_or(0);
    let kind_width = keys
        .iter()
        .map(|key| key.kind.as_str().chars().count())
        .max()
        .unwrap_or(0);
    keys.iter()
        .map(|key| {
            let favorite = if key.is_favorite { "*" } else { " " };
            format!(
                "{favorite} {:nw$}  {:kw$}  {}",
                key.name,
                key.kind.as_str(),
                key.id,
                nw = name_width,
                kw = kind_width,
            )
        })
        .collect()
}
