mod ls_files_lists_index;
