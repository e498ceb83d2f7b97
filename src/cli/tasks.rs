//! Task CLI commands

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::controller::{Controller, ControllerError, MoveOutcome};
use crate::domain::{task_sequence, TaskMove};
use crate::storage::{Buffer, Discard, DocumentSource, FileDocument, Settings, SettingsFile};
use crate::surface::HANDLE_GLYPH;

pub fn list(output: &Output, settings_file: &SettingsFile, file: &Path) -> Result<()> {
    let settings = settings_file.load()?;
    let text = FileDocument::new(file).text()?;

    let mut controller = Controller::new(settings);
    let decorated = controller.initialize(&text);
    let tasks = task_sequence(&text);

    output.verbose_ctx(
        "list",
        &format!("Found {} task(s), {} decorated", tasks.len(), decorated),
    );

    if output.is_json() {
        let items: Vec<_> = tasks
            .iter()
            .enumerate()
            .map(|(index, task)| {
                serde_json::json!({
                    "index": index,
                    "line": task.line_number,
                    "checked": task.checked,
                    "depth": task.depth(),
                    "description": task.description,
                })
            })
            .collect();
        output.data(&serde_json::json!({
            "draggable": decorated > 0,
            "tasks": items,
        }));
    } else if tasks.is_empty() {
        println!("No tasks found in {}", file.display());
    } else {
        let handle = if decorated > 0 { HANDLE_GLYPH } else { "  " };

        println!("{:<6} {:<6} TASK", "INDEX", "LINE");
        println!("{}", "-".repeat(50));

        for (index, task) in tasks.iter().enumerate() {
            println!("{:<6} {:<6} {} {}", index, task.line_number, handle, task);
        }

        if decorated == 0 {
            println!();
            println!("Draggable tasklists are disabled for this document.");
        }
    }

    Ok(())
}

pub fn move_task(
    output: &Output,
    settings_file: &SettingsFile,
    file: &Path,
    from: usize,
    to: usize,
    dry_run: bool,
) -> Result<()> {
    let settings = settings_file.load()?;
    let settings = if dry_run {
        settings.with("save_order_automatically", "false")?
    } else {
        settings
    };

    let text = FileDocument::new(file).text()?;

    let mut controller = Controller::new(settings);
    if !controller.is_enabled_for(&text) {
        return Err(ControllerError::Disabled.into());
    }

    let count = controller.initialize(&text);
    output.verbose_ctx("move", &format!("Decorated {} task(s)", count));

    // The buffer plays the editor; the file is only written through the sink
    let mut buffer = Buffer::new(text);
    let mut sink = FileDocument::new(file);

    let outcome = if from < count && to < count {
        controller.pick_up(from)?;
        controller.drop_on(to, &mut buffer, &mut sink)?
    } else {
        output.verbose_ctx(
            "move",
            &format!("Index out of range ({} task(s)), leaving document unchanged", count),
        );
        controller.apply_move(TaskMove::new(from, to), &mut buffer, &mut Discard)?
    };

    let (changed, persisted) = match outcome {
        MoveOutcome::Unchanged => (false, false),
        MoveOutcome::Reordered { persisted } => (true, persisted),
    };

    if output.is_json() {
        let mut data = serde_json::json!({
            "file": file.display().to_string(),
            "from": from,
            "to": to,
            "changed": changed,
            "persisted": persisted,
        });
        if !persisted {
            data["text"] = serde_json::Value::String(buffer.as_str().to_string());
        }
        output.data(&data);
    } else if persisted {
        output.success("Task order updated");
    } else {
        output.verbose_ctx("move", if changed { "Not saving" } else { "Task order unchanged" });
        output.document(buffer.as_str());
    }

    Ok(())
}

pub fn toggle(output: &Output, settings_file: &SettingsFile, file: Option<&Path>) -> Result<()> {
    let current = settings_file.load()?;
    let enabled = !current.enable_in_preview_mode;
    let next: Settings = current.with("enable_in_preview_mode", &enabled.to_string())?;

    // Read the document before saving so a bad path leaves settings untouched
    let decorated = match file {
        Some(file) => {
            let text = FileDocument::new(file).text()?;
            let mut controller = Controller::new(current);
            controller.initialize(&text);
            Some(controller.update_settings(next.clone(), &text))
        }
        None => None,
    };

    settings_file.save(&next)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "enabled": enabled,
            "decorated": decorated,
        }));
    } else {
        output.success(if enabled {
            "Draggable tasklists enabled"
        } else {
            "Draggable tasklists disabled"
        });
        if let (Some(file), Some(count)) = (file, decorated) {
            println!("{} task(s) draggable in {}", count, file.display());
        }
    }

    Ok(())
}
