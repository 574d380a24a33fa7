//! Prompt assembly for the roast pipeline.

use crate::target::RoastTarget;

/// A generation request for one target: persona conditioning plus the
/// material the model is asked to roast.
///
/// Built fresh per target, handed straight to the model client, and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoastPrompt {
    /// System-style instruction from the target's persona.
    pub persona: String,
    /// Identity block and itemized overdue tasks.
    pub material: String,
}

impl RoastPrompt {
    /// Build the prompt for a target.
    ///
    /// Pure function of its input. An empty task list renders an empty
    /// itemized block; profile fields are embedded verbatim.
    pub fn build(target: &RoastTarget) -> Self {
        let persona = target.level.persona().system_prompt();

        let task_list = target
            .tasks
            .iter()
            .map(|t| format!("- [{}] {}", t.container, t.title))
            .collect::<Vec<_>>()
            .join("\n");

        let material = format!(
            "TARGET IDENTITY:\n\
             - Name: {name}\n\
             - Profession: {job_title}\n\
             - Bio: \"{bio}\"\n\
             \n\
             OVERDUE TASKS:\n\
             {task_list}\n\
             \n\
             Based on the persona instructions, roast this user for their procrastination.\n\
             Reference their job title and bio to make it personal.",
            name = target.name,
            job_title = target.job_title,
            bio = target.bio,
            task_list = task_list,
        );

        Self { persona, material }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::RoastLevel;

    fn ada() -> RoastTarget {
        RoastTarget::new("u-ada", "Ada", "ada@example.com")
            .with_job_title("Engineer")
            .with_bio("loves deadlines")
            .with_level(RoastLevel::Toxic)
            .with_task("Daily Tasks", "Write report")
            .with_task("Weekly Goals", "Ship feature")
    }

    #[test]
    fn material_embeds_profile_fields_verbatim() {
        let prompt = RoastPrompt::build(&ada());
        assert!(prompt.material.contains("- Name: Ada"));
        assert!(prompt.material.contains("- Profession: Engineer"));
        assert!(prompt.material.contains("- Bio: \"loves deadlines\""));
    }

    #[test]
    fn material_lists_tasks_in_input_order() {
        let prompt = RoastPrompt::build(&ada());
        let first = prompt
            .material
            .find("- [Daily Tasks] Write report")
            .expect("first task line missing");
        let second = prompt
            .material
            .find("- [Weekly Goals] Ship feature")
            .expect("second task line missing");
        assert!(first < second);
    }

    #[test]
    fn persona_follows_roast_level() {
        let prompt = RoastPrompt::build(&ada());
        assert!(prompt.persona.contains("The 'Friend' who hates you"));
    }

    #[test]
    fn empty_task_list_still_formats() {
        let target = RoastTarget::new("u1", "Linus", "linus@example.com")
            .with_job_title("Maintainer")
            .with_bio("merge window enjoyer");
        let prompt = RoastPrompt::build(&target);

        assert!(prompt.material.contains("OVERDUE TASKS:"));
        assert!(prompt.material.contains("- Name: Linus"));
        // No task lines at all.
        assert!(!prompt.material.contains("\n- ["));
    }

    #[test]
    fn one_line_per_task() {
        let prompt = RoastPrompt::build(&ada());
        let lines = prompt
            .material
            .lines()
            .filter(|l| l.starts_with("- ["))
            .count();
        assert_eq!(lines, 2);
    }
}
