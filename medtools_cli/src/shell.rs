//! Interactive text shell.
//!
//! Each loop iteration renders the page the session's navigation state
//! points at, reads the user's answers and applies the resulting action.

use crate::render;
use medtools_core::{
    compute_bmi, compute_creatinine_clearance, BmiInput, Config, CreatinineInput, Page, Result,
    Session, Sex,
};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

const FOOTER: &str = "Developed by Dr. Abdoulaziz Aoudi | Data Scientist | © 2025 - All rights reserved";

/// Calculator pages in home-menu order
const CALCULATORS: [Page; 2] = [Page::Bmi, Page::CreatinineClearance];

enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    session: Session,
    config: Config,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Self {
        Self {
            session: Session::new(),
            config,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.session.record_interaction();
            let flow = match self.session.navigation().current_page() {
                Page::Home => self.home()?,
                Page::Bmi => self.bmi_page()?,
                Page::CreatinineClearance => self.creatinine_page()?,
            };
            if let Flow::Quit = flow {
                break;
            }
        }

        writeln!(self.output, "{}", "─".repeat(41))?;
        writeln!(self.output, "{}", FOOTER)?;
        tracing::debug!(
            "Session ended after {} interactions",
            self.session.interaction_count()
        );
        Ok(())
    }

    /// Read one line; `None` once input is exhausted
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask(&mut self, label: &str, default: impl Display) -> Result<Option<String>> {
        write!(self.output, "  {} [{}]: ", label, default)?;
        self.output.flush()?;
        self.read_line()
    }

    fn home(&mut self) -> Result<Flow> {
        render::banner(&mut self.output, &Page::Home.title().to_uppercase())?;
        writeln!(
            self.output,
            "  Interactions this session: {}",
            self.session.interaction_count()
        )?;
        writeln!(self.output, "  {}", Page::Home.summary())?;
        writeln!(self.output)?;
        for (i, page) in CALCULATORS.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, page.title())?;
            writeln!(self.output, "     {}", page.summary())?;
        }
        writeln!(self.output, "  q. Quit")?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let Some(choice) = self.read_line()? else {
            return Ok(Flow::Quit);
        };

        let choice = choice.to_lowercase();
        if choice == "q" || choice == "quit" {
            return Ok(Flow::Quit);
        }

        // Menu numbers first, then page ids ("bmi", "creatinine")
        let target = match choice.parse::<usize>() {
            Ok(n) if (1..=CALCULATORS.len()).contains(&n) => Ok(CALCULATORS[n - 1]),
            _ => choice.parse::<Page>(),
        };
        match target {
            Ok(page) => self.session.navigation_mut().navigate_to(page),
            Err(e) => writeln!(self.output, "\n{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn bmi_page(&mut self) -> Result<Flow> {
        render::banner(&mut self.output, Page::Bmi.title())?;
        let form = self.config.bmi.clone();

        let Some(weight) = self.ask("Weight (kg)", form.weight_kg)? else {
            return Ok(Flow::Quit);
        };
        let Some(height) = self.ask("Height (m)", format!("{:.2}", form.height_m))? else {
            return Ok(Flow::Quit);
        };
        writeln!(self.output)?;

        let outcome = (|| -> std::result::Result<_, String> {
            let weight = parse_or(&weight, form.weight_kg, "weight")?;
            let height = parse_or(&height, form.height_m, "height")?;
            BmiInput::validated(weight, height, &form)
                .and_then(|input| compute_bmi(&input))
                .map_err(|e| e.to_string())
        })();

        match outcome {
            Ok(result) => render::bmi_text(&mut self.output, &result, &self.config)?,
            Err(message) => writeln!(self.output, "  ✗ {}\n", message)?,
        }
        self.after_result()
    }

    fn creatinine_page(&mut self) -> Result<Flow> {
        render::banner(&mut self.output, Page::CreatinineClearance.title())?;
        let form = self.config.creatinine.clone();

        let mut answers = Vec::with_capacity(4);
        for (label, default) in [
            ("Age (years)", form.age.to_string()),
            ("Sex (male/female)", Sex::Male.to_string()),
            ("Weight (kg)", form.weight_kg.to_string()),
            ("Creatinine (mg/dL)", form.serum_creatinine.to_string()),
        ] {
            match self.ask(label, default)? {
                Some(answer) => answers.push(answer),
                None => return Ok(Flow::Quit),
            }
        }
        writeln!(self.output)?;

        let outcome = (|| -> std::result::Result<_, String> {
            let age = parse_or(&answers[0], form.age, "age")?;
            let sex = parse_or(&answers[1], Sex::Male, "sex")?;
            let weight = parse_or(&answers[2], form.weight_kg, "weight")?;
            let creatinine = parse_or(&answers[3], form.serum_creatinine, "creatinine")?;
            let input = CreatinineInput::validated(age, sex, weight, creatinine, &form)
                .map_err(|e| e.to_string())?;
            Ok(compute_creatinine_clearance(&input))
        })();

        match outcome {
            Ok(result) => render::creatinine_text(&mut self.output, &result, &self.config)?,
            Err(message) => writeln!(self.output, "  ✗ {}\n", message)?,
        }
        self.after_result()
    }

    fn after_result(&mut self) -> Result<Flow> {
        writeln!(self.output, "{}", "─".repeat(41))?;
        let can_return_home = self.session.navigation().can_return_home();
        writeln!(self.output, "Press Enter to calculate again")?;
        if can_return_home {
            writeln!(self.output, "  'h' + Enter to return home")?;
        }
        writeln!(self.output, "  'q' + Enter to quit")?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        match self.read_line()?.as_deref().map(str::to_lowercase).as_deref() {
            None | Some("q") => Ok(Flow::Quit),
            Some("h") if can_return_home => {
                self.session.navigation_mut().return_home();
                Ok(Flow::Continue)
            }
            Some(_) => Ok(Flow::Continue),
        }
    }
}

/// Parse a form answer, using `default` when it is blank
fn parse_or<T: FromStr>(answer: &str, default: T, field: &str) -> std::result::Result<T, String> {
    if answer.is_empty() {
        return Ok(default);
    }
    answer
        .parse()
        .map_err(|_| format!("Could not read {} from '{}'", field, answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (String, Session) {
        let mut out = Vec::new();
        let session = {
            let mut shell = Shell::new(Config::default(), Cursor::new(script.to_string()), &mut out);
            shell.run().unwrap();
            shell.session().clone()
        };
        (String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn test_quit_from_home() {
        let (text, session) = run("q\n");
        assert!(text.contains("MEDICAL TOOLS"));
        assert!(text.contains(FOOTER));
        assert_eq!(session.interaction_count(), 1);
        assert_eq!(session.navigation().current_page(), Page::Home);
    }

    #[test]
    fn test_bmi_with_defaults_then_home() {
        let (text, session) = run("1\n\n\nh\nq\n");
        assert!(text.contains("Your BMI: 22.86 kg/m²"));
        assert_eq!(session.navigation().current_page(), Page::Home);
        assert_eq!(session.interaction_count(), 3);
    }

    #[test]
    fn test_creatinine_female() {
        let (text, _) = run("2\n50\nf\n70\n1.0\nq\n");
        assert!(text.contains("Estimated clearance: 74.38 mL/min"));
        assert!(text.contains("Mild renal impairment (stage 2)"));
    }

    #[test]
    fn test_invalid_input_shows_no_result() {
        let (text, session) = run("1\n500\n1.75\nq\n");
        assert!(text.contains("weight_kg = 500 is out of range"));
        assert!(!text.contains("Your BMI"));
        assert_eq!(session.navigation().current_page(), Page::Bmi);
    }

    #[test]
    fn test_menu_accepts_page_ids() {
        let (text, session) = run("CREATININE\n\n\n\n\nq\n");
        assert!(text.contains("Estimated clearance: 87.50 mL/min"));
        assert_eq!(session.navigation().current_page(), Page::CreatinineClearance);
    }

    #[test]
    fn test_menu_rejects_unknown_choice() {
        let (text, session) = run("3\nsettings\nq\n");
        assert!(text.contains("Unknown page: 3"));
        assert!(text.contains("Unknown page: settings"));
        assert_eq!(session.navigation().current_page(), Page::Home);
        assert_eq!(session.interaction_count(), 3);
    }

    #[test]
    fn test_return_home_offered_on_calculator_pages() {
        let (text, _) = run("1\n\n\nq\n");
        assert!(text.contains("'h' + Enter to return home"));
    }

    #[test]
    fn test_unparseable_number() {
        let (text, _) = run("1\nabc\n\nq\n");
        assert!(text.contains("Could not read weight from 'abc'"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (text, _) = run("2\n60\n");
        assert!(text.contains(FOOTER));
        assert!(!text.contains("Estimated clearance"));
    }

    #[test]
    fn test_recalculate_stays_on_page() {
        let (text, session) = run("1\n100\n1.75\n\n50\n1.75\nq\n");
        assert!(text.contains("Your BMI: 32.65 kg/m²"));
        assert!(text.contains("UNDERWEIGHT"));
        assert_eq!(session.navigation().current_page(), Page::Bmi);
    }
}
