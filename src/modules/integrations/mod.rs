pub mod google_books;
