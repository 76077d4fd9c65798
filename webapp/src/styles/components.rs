pub const BASE_COMPONENTS: &str = r#"
/* Cards */
.card {
  background-color: var(--surface);
  border-radius: 12px;
  padding: 16px;
}

.card-lg {
  border-radius: 16px;
  padding: 24px;
  transition: box-shadow 250ms ease;
}

.card-lg:hover {
  box-shadow: 0 10px 15px -3px var(--accent-strong);
}

.card-title {
  font-size: 1.125rem;
  font-weight: 600;
}

.card-subtitle {
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* Buttons */
.btn {
  display: inline-block;
  background-color: var(--accent-strong);
  color: #FFFFFF;
  border: none;
  border-radius: 12px;
  padding: 8px 24px;
  cursor: pointer;
  font-size: 1rem;
}

.btn:hover {
  background-color: var(--accent);
  color: #FFFFFF;
}

/* Form fields */
.field {
  width: 100%;
  background-color: var(--surface);
  color: var(--text);
  border: none;
  border-radius: 12px;
  padding: 12px;
  outline: none;
  font: inherit;
}

.field::placeholder {
  color: var(--text-muted);
}
"#;
