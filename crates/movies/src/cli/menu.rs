//! The interactive menu: show the choices, read one, run it, repeat.
//!
//! Each action gathers its input through the [`Prompter`], calls one API method and
//! renders the returned `CmdResult`. Input ending in the middle of an action quits
//! the menu like `q` does.

use super::prompt::Prompter;
use super::render;
use colored::Colorize;
use movieapp::api::{CmdResult, MovieApi, MovieFilter, SortOrder};
use movieapp::lookup::MetadataLookup;
use movieapp::model::{Movie, MovieUpdate};
use movieapp::store::RecordStore;
use once_cell::sync::Lazy;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Delete,
    Filter,
    Stats,
    Random,
    Search,
    SortByRating,
    SortByYear,
    List,
    Update,
    Website,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 12] = [
        MenuAction::Add,
        MenuAction::Delete,
        MenuAction::Filter,
        MenuAction::Stats,
        MenuAction::Random,
        MenuAction::Search,
        MenuAction::SortByRating,
        MenuAction::SortByYear,
        MenuAction::List,
        MenuAction::Update,
        MenuAction::Website,
        MenuAction::Quit,
    ];

    pub fn from_input(input: &str) -> Option<Self> {
        let choice = input.trim().to_lowercase();
        if choice == "q" || choice == "quit" {
            return Some(MenuAction::Quit);
        }
        let n: usize = choice.parse().ok()?;
        if n == 0 {
            return None;
        }
        Self::ALL
            .get(n - 1)
            .copied()
            .filter(|a| *a != MenuAction::Quit)
    }

    fn key(self) -> String {
        match self {
            MenuAction::Quit => "q".to_string(),
            other => {
                let pos = Self::ALL.iter().position(|a| *a == other).unwrap_or(0);
                (pos + 1).to_string()
            }
        }
    }

    fn label(self) -> &'static str {
        match self {
            MenuAction::Add => "Add movie",
            MenuAction::Delete => "Delete movie",
            MenuAction::Filter => "Filter movies",
            MenuAction::Stats => "Movie stats",
            MenuAction::Random => "Get a random movie",
            MenuAction::Search => "Search movie",
            MenuAction::SortByRating => "Movies sorted by rating",
            MenuAction::SortByYear => "Movies sorted by year",
            MenuAction::List => "List all movies",
            MenuAction::Update => "Update movie",
            MenuAction::Website => "Generate website",
            MenuAction::Quit => "Quit",
        }
    }
}

static MENU: Lazy<String> = Lazy::new(|| {
    let entries: Vec<String> = MenuAction::ALL
        .iter()
        .map(|a| format!("{:<4}{}", format!("{}.", a.key()), a.label()))
        .collect();
    render::grid(&entries, 3)
});

/// Whether the menu keeps going after an action.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Shorthand for "read an answer or stop the menu on EOF".
macro_rules! answer {
    ($e:expr) => {
        match $e? {
            Some(value) => value,
            None => return Ok(Flow::Quit),
        }
    };
}

pub struct Menu<'a, S: RecordStore> {
    api: &'a MovieApi<S>,
    lookup: Option<&'a dyn MetadataLookup>,
}

impl<'a, S: RecordStore> Menu<'a, S> {
    pub fn new(api: &'a MovieApi<S>, lookup: Option<&'a dyn MetadataLookup>) -> Self {
        Self { api, lookup }
    }

    pub fn run<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> anyhow::Result<()> {
        writeln!(p.output(), "{}", "********** My Movies Database **********".bold())?;
        loop {
            writeln!(p.output(), "\n{}", *MENU)?;
            let Some(input) = p.line("Choose an action: ")? else {
                writeln!(p.output())?;
                break;
            };

            let Some(action) = MenuAction::from_input(&input) else {
                writeln!(p.output(), "{}", "Invalid input, please try again.".red())?;
                continue;
            };
            tracing::debug!(?action, "menu selection");

            if action == MenuAction::Quit {
                writeln!(p.output(), "Bye!")?;
                break;
            }
            if self.dispatch(action, p)? == Flow::Quit {
                writeln!(p.output())?;
                break;
            }
        }
        Ok(())
    }

    fn dispatch<R: BufRead, W: Write>(
        &self,
        action: MenuAction,
        p: &mut Prompter<R, W>,
    ) -> anyhow::Result<Flow> {
        match action {
            MenuAction::Add => self.add(p),
            MenuAction::Delete => {
                let title = answer!(p.line("Enter name of movie you want to delete: "));
                let result = self.api.delete_movie(title.trim())?;
                show(p, &result, false)
            }
            MenuAction::Filter => self.filter(p),
            MenuAction::Stats => {
                let result = self.api.stats()?;
                render::write_messages(p.output(), &result.messages)?;
                if let Some(stats) = &result.stats {
                    render::write_stats(p.output(), stats)?;
                }
                Ok(Flow::Continue)
            }
            MenuAction::Random => {
                let result = self.api.random_movie()?;
                show(p, &result, false)
            }
            MenuAction::Search => {
                let term = answer!(p.line("Enter part of movie name: "));
                let result = self.api.search_movies(term.trim())?;
                show(p, &result, true)
            }
            MenuAction::SortByRating => {
                let result = self.api.movies_by_rating()?;
                show(p, &result, true)
            }
            MenuAction::SortByYear => {
                let latest_first = answer!(p.yes_no("Do you want the latest movies first? (Y/N) "));
                let order = if latest_first {
                    SortOrder::Descending
                } else {
                    SortOrder::Ascending
                };
                let result = self.api.movies_by_year(order)?;
                show(p, &result, true)
            }
            MenuAction::List => {
                let result = self.api.list_movies()?;
                show(p, &result, true)
            }
            MenuAction::Update => self.update(p),
            MenuAction::Website => {
                let result = self.api.generate_website()?;
                show(p, &result, false)
            }
            MenuAction::Quit => Ok(Flow::Quit),
        }
    }

    fn add<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> anyhow::Result<Flow> {
        let title = answer!(p.required("Enter a movie title: ", "Movie title can't be empty"));

        let result = match self.lookup {
            Some(lookup) => self.api.add_movie_by_lookup(lookup, &title)?,
            None => {
                let year: i32 =
                    answer!(p.parsed("Enter release year: ", "Invalid, please enter a whole year!"));
                let rating = answer!(p.rating("Enter rating: ", "Invalid, please enter a number!"));
                self.api.add_movie(Movie::new(title, year, rating))?
            }
        };
        show(p, &result, false)
    }

    fn filter<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> anyhow::Result<Flow> {
        const NUMBER: &str = "Invalid, please enter a number!";
        const YEAR: &str = "Invalid, please enter a whole year!";

        let filter = MovieFilter {
            min_rating: answer!(p.optional("Enter minimum rating, leave blank for no filter: ", NUMBER)),
            start_year: answer!(p.optional("Enter start year, leave blank for no filter: ", YEAR)),
            end_year: answer!(p.optional("Enter end year, leave blank for no filter: ", YEAR)),
        };

        let result = self.api.filter_movies(&filter)?;
        render::write_messages(p.output(), &result.messages)?;
        if result.is_done() {
            writeln!(p.output(), "Filtered movies:")?;
            render::write_movies(p.output(), &result.listed_movies)?;
        }
        Ok(Flow::Continue)
    }

    fn update<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> anyhow::Result<Flow> {
        let title = answer!(p.line("Enter name of movie you want to update: "));
        let title = title.trim();

        // Ask for the new rating only when the movie is there.
        let found = self.api.find_movie(title)?;
        if !found.is_done() {
            return show(p, &found, false);
        }
        render::write_messages(p.output(), &found.messages)?;

        let rating = answer!(p.rating("Enter new movie rating: ", "Please enter a valid rating"));
        let mut update = MovieUpdate::rating(rating);

        if self.api.supports_notes() {
            let note = answer!(p.line("Enter a note, leave blank to keep the current one: "));
            let note = note.trim();
            if !note.is_empty() {
                update = update.with_note(note);
            }
        }

        let result = self.api.update_movie(title, &update)?;
        show(p, &result, false)
    }
}

fn show<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    result: &CmdResult,
    with_movies: bool,
) -> anyhow::Result<Flow> {
    render::write_messages(p.output(), &result.messages)?;
    if with_movies {
        render::write_movies(p.output(), &result.listed_movies)?;
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use movieapp::api::WebsitePaths;
    use movieapp::store::memory::InMemoryStore;
    use movieapp::test_utils::sample_store;
    use std::io::Cursor;

    struct FixedLookup(Movie);

    impl MetadataLookup for FixedLookup {
        fn find_by_title(&self, _title: &str) -> Option<Movie> {
            Some(self.0.clone())
        }
    }

    fn run_menu(
        api: &MovieApi<InMemoryStore>,
        lookup: Option<&dyn MetadataLookup>,
        input: &str,
    ) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        {
            let mut p = Prompter::new(Cursor::new(input.as_bytes().to_vec()), &mut out);
            Menu::new(api, lookup).run(&mut p).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    fn api() -> MovieApi<InMemoryStore> {
        MovieApi::new(sample_store(), WebsitePaths::default())
    }

    #[test]
    fn test_from_input() {
        assert_eq!(MenuAction::from_input("1"), Some(MenuAction::Add));
        assert_eq!(MenuAction::from_input(" 11 "), Some(MenuAction::Website));
        assert_eq!(MenuAction::from_input("Q"), Some(MenuAction::Quit));
        assert_eq!(MenuAction::from_input("quit"), Some(MenuAction::Quit));
        assert_eq!(MenuAction::from_input("0"), None);
        assert_eq!(MenuAction::from_input("12"), None);
        assert_eq!(MenuAction::from_input("add"), None);
    }

    #[test]
    fn test_menu_lists_every_action() {
        for label in ["1.  Add movie", "10. Update movie", "11. Generate website", "q.  Quit"] {
            assert!(MENU.contains(label), "missing {:?} in\n{}", label, *MENU);
        }
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let out = run_menu(&api(), None, "42\nq\n");
        assert!(out.contains("Invalid input, please try again."));
        assert_eq!(out.matches("Choose an action: ").count(), 2);
        assert!(out.contains("Bye!"));
    }

    #[test]
    fn test_eof_quits() {
        let out = run_menu(&api(), None, "");
        assert_eq!(out.matches("Choose an action: ").count(), 1);
    }

    #[test]
    fn test_list() {
        let out = run_menu(&api(), None, "9\nq\n");
        assert!(out.contains("5 movies in total"));
        assert!(out.contains("Pulp Fiction (1994): 8.9"));
    }

    #[test]
    fn test_manual_add_reprompts_bad_numbers() {
        let api = api();
        let out = run_menu(&api, None, "1\nHeat\nninety-five\n1995\n8.3\nq\n");
        assert!(out.contains("Invalid, please enter a whole year!"));
        assert!(out.contains("Movie Heat successfully added"));
        assert!(api
            .store()
            .snapshot()
            .unwrap()
            .contains(&Movie::new("Heat", 1995, 8.3)));
    }

    #[test]
    fn test_add_with_lookup_uses_canonical_record() {
        let api = api();
        let lookup = FixedLookup(Movie::new("The Matrix", 1999, 8.7));
        let out = run_menu(&api, Some(&lookup), "1\nmatrix\nq\n");
        assert!(out.contains("Movie The Matrix successfully added"));
    }

    #[test]
    fn test_delete_unknown() {
        let out = run_menu(&api(), None, "2\nNope\nq\n");
        assert!(out.contains("Movie Nope doesn't exist!"));
    }

    #[test]
    fn test_filter_with_blank_bounds() {
        let out = run_menu(&api(), None, "3\n9\n\n\nq\n");
        assert!(out.contains("Filtered movies:"));
        assert!(out.contains("The Godfather (1972): 9.3"));
        assert!(!out.contains("Pulp Fiction (1994)"));
    }

    #[test]
    fn test_stats() {
        let out = run_menu(&api(), None, "4\nq\n");
        assert!(out.contains("Average rating: 6.9"));
        assert!(out.contains("Worst movie(s): The Room, Birdemic, 3.6"));
    }

    #[test]
    fn test_sorted_by_year_latest_first() {
        let out = run_menu(&api(), None, "8\ny\nq\n");
        let birdemic = out.find("Birdemic (2010)").unwrap();
        let godfather = out.find("The Godfather (1972)").unwrap();
        assert!(birdemic < godfather);
    }

    #[test]
    fn test_update_asks_rating_only_for_known_titles() {
        let api = api();
        let out = run_menu(&api, None, "10\nNope\nq\n");
        assert!(out.contains("Movie Nope doesn't exist!"));
        assert!(!out.contains("Enter new movie rating"));

        let out = run_menu(&api, None, "10\nThe Room\nbad\n5.5\nso bad it's good\nq\n");
        assert!(out.contains("Please enter a valid rating"));
        let room = api
            .store()
            .snapshot()
            .unwrap()
            .into_iter()
            .find(|m| m.title == "The Room")
            .unwrap();
        assert_eq!(room.rating, 5.5);
        assert_eq!(room.note.as_deref(), Some("so bad it's good"));
    }

    #[test]
    fn test_update_reports_reset_of_empty_store() {
        let api = MovieApi::new(InMemoryStore::with_movies(vec![]), WebsitePaths::default());
        let out = run_menu(&api, None, "10\nNope\nq\n");
        assert!(out.contains("was empty, loading default data"));
        assert!(out.contains("Movie Nope doesn't exist!"));
    }

    #[test]
    fn test_update_reports_reset_before_asking_rating() {
        let api = MovieApi::new(InMemoryStore::with_movies(vec![]), WebsitePaths::default());
        let out = run_menu(&api, None, "10\nFight Club\n9.1\n\nq\n");
        let reset = out.find("was empty, loading default data").unwrap();
        let asked = out.find("Enter new movie rating").unwrap();
        assert!(reset < asked);
        assert_eq!(api.store().snapshot().unwrap()[0].rating, 9.1);
    }

    #[test]
    fn test_non_finite_ratings_are_asked_again() {
        let api = api();
        let out = run_menu(&api, None, "1\nHeat\n1995\nnan\ninf\n8.3\nq\n");
        assert_eq!(out.matches("Invalid, please enter a number!").count(), 2);
        assert!(out.contains("Movie Heat successfully added"));

        let out = run_menu(&api, None, "10\nHeat\nNaN\n-inf\n7.9\n\nq\n");
        assert_eq!(out.matches("Please enter a valid rating").count(), 2);
        let heat = api
            .store()
            .snapshot()
            .unwrap()
            .into_iter()
            .find(|m| m.title == "Heat")
            .unwrap();
        assert_eq!(heat.rating, 7.9);
        assert_eq!(api.store().snapshot().unwrap().len(), 6);
    }

    #[test]
    fn test_eof_mid_action_quits() {
        let out = run_menu(&api(), None, "1\nHeat\n");
        assert!(!out.contains("successfully added"));
    }
}
