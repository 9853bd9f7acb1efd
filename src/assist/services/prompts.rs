//! Fixed prompt templates for the task assistant.

use crate::task::domain::Task;
use minijinja::{Environment, context};

const SUMMARY_TEMPLATE: &str = "\
Eres un asistente de productividad. Analiza las siguientes tareas pendientes y genera un resumen ejecutivo breve en {{ language }}. Incluye:
1. Una visión general de las tareas
2. Áreas de enfoque principales
3. Una recomendación para abordarlas

Tareas:
{{ task_list }}

Responde de forma concisa y útil.";

const PRIORITIES_TEMPLATE: &str = "\
Eres un experto en gestión de tareas. Analiza las siguientes tareas y asigna una prioridad del 1 al 5 (1 = más urgente, 5 = menos urgente) basándote en su título y descripción.

Tareas:
{{ task_list }}

Responde ÚNICAMENTE con un JSON array válido con este formato exacto, sin texto adicional:
[{\"taskId\": \"uuid\", \"suggestedPriority\": número, \"reason\": \"razón breve\"}]";

const DESCRIPTION_TEMPLATE: &str = "\
Eres un asistente de productividad. Dado el siguiente título de tarea, genera una descripción breve y útil en {{ language }} (máximo 2 oraciones) que describa lo que implica esta tarea.

Título: \"{{ title }}\"

Responde solo con la descripción, sin comillas ni formato adicional.";

const MISSING_DESCRIPTION: &str = "Sin descripción";

/// Default reply language interpolated into the templates.
pub const DEFAULT_LANGUAGE: &str = "español";

/// Renders the assistant's three prompt shapes.
///
/// Rendering is a pure function of the inputs and the configured language.
#[derive(Debug, Clone)]
pub struct PromptBook {
    environment: Environment<'static>,
    language: String,
}

impl PromptBook {
    /// Creates a prompt book replying in `language`.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] if a built-in template fails to parse.
    pub fn new(language: impl Into<String>) -> Result<Self, minijinja::Error> {
        let mut environment = Environment::new();
        environment.add_template("summary", SUMMARY_TEMPLATE)?;
        environment.add_template("priorities", PRIORITIES_TEMPLATE)?;
        environment.add_template("description", DESCRIPTION_TEMPLATE)?;
        Ok(Self {
            environment,
            language: language.into(),
        })
    }

    /// Renders the executive-summary prompt for `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn summary(&self, tasks: &[Task]) -> Result<String, minijinja::Error> {
        self.environment.get_template("summary")?.render(context! {
            language => self.language.as_str(),
            task_list => numbered_task_list(tasks),
        })
    }

    /// Renders the priority-suggestion prompt for `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn priorities(&self, tasks: &[Task]) -> Result<String, minijinja::Error> {
        self.environment.get_template("priorities")?.render(context! {
            task_list => bulleted_task_list(tasks),
        })
    }

    /// Renders the description-draft prompt for `title`.
    ///
    /// # Errors
    ///
    /// Returns [`minijinja::Error`] when rendering fails.
    pub fn description(&self, title: &str) -> Result<String, minijinja::Error> {
        self.environment.get_template("description")?.render(context! {
            language => self.language.as_str(),
            title => title,
        })
    }
}

/// Renders `1. "<title>": <description>` lines, omitting the description
/// segment when it is absent or empty.
#[must_use]
pub fn numbered_task_list(tasks: &[Task]) -> String {
    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let position = index + 1;
            match non_empty_description(task) {
                Some(description) => format!("{position}. \"{}\": {description}", task.title()),
                None => format!("{position}. \"{}\"", task.title()),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders `- ID: <id>, Título: "<title>", Descripción: "<description>"`
/// lines, substituting a placeholder for absent or empty descriptions.
#[must_use]
pub fn bulleted_task_list(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(|task| {
            format!(
                "- ID: {}, Título: \"{}\", Descripción: \"{}\"",
                task.id(),
                task.title(),
                non_empty_description(task).unwrap_or(MISSING_DESCRIPTION),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_empty_description(task: &Task) -> Option<&str> {
    task.description().filter(|text| !text.is_empty())
}
