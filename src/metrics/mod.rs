pub mod bleu;
