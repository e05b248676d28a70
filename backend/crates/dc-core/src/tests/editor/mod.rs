mod experience_list;
